//! Pane rendering: structure graph, current step, status bar
//!
//! The panes are display-only: they read the static structure, the current
//! step and the playback counters, and never compute anything algorithmic.

use crate::playback::PlaybackState;
use crate::structure::{IntersectingLists, List, Structure, Tree};
use crate::trace::{Step, StepResult};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the static input structure on the left
pub fn render_structure_pane(frame: &mut Frame, area: Rect, structure: &Structure) {
    let lines: Vec<Line> = structure_lines(structure)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, Style::default().fg(DEFAULT_THEME.fg))))
        .collect();

    let block = Block::default()
        .title(" Structure ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the current step on the right
pub fn render_step_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    step: Option<&Step>,
    structure: &Structure,
) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(step) = step {
        let action_color = if step.action.is_terminal() {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.primary
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", step.action),
                Style::default()
                    .bg(action_color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  step {}", step.seq),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            step.description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
        lines.push(Line::from(""));

        for pointer in &step.pointers {
            let target = match pointer.node {
                Some(id) => match node_value(structure, id) {
                    Some(value) => format!("#{} (value {})", id, value),
                    None => format!("#{}", id),
                },
                None => "null".to_string(),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>10} ", pointer.name),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(
                    format!("-> {}", target),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]));
        }

        for aux in &step.aux {
            let ids: Vec<String> = aux.ids.iter().map(|id| format!("#{}", id)).collect();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>10} ", aux.name),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(
                    format!("[{}]", ids.join(", ")),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]));
        }

        for (name, value) in &step.counters {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>10} ", name),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("= {}", value),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]));
        }

        if let Some(array) = &step.array {
            lines.push(Line::from(Span::styled(
                format!("     array [{}]", join_values(array)),
                Style::default().fg(DEFAULT_THEME.fg),
            )));
        }

        if let Some(result) = &step.result {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("result: {}", format_result(result, structure)),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "no step attached",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    position: usize,
    total: usize,
    state: PlaybackState,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", position + 1, total),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.bar_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.fg);

    let (badge, badge_color) = match state {
        PlaybackState::AtStart => (" START ", DEFAULT_THEME.success),
        PlaybackState::Playing => (" PLAYING ", DEFAULT_THEME.secondary),
        PlaybackState::Paused => (" PAUSED ", DEFAULT_THEME.primary),
        PlaybackState::Finished => (" END ", DEFAULT_THEME.error),
    };

    let right_spans = vec![
        Span::styled(" n ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled(" space ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}

fn node_value(structure: &Structure, id: usize) -> Option<i64> {
    match structure {
        Structure::Tree(tree) => tree.get(id).map(|node| node.value),
        Structure::List(list) => list.get(id).map(|node| node.value),
        Structure::Lists(lists) => lists.get(id).map(|node| node.value),
        Structure::Array(array) => array.values().get(id).copied(),
    }
}

fn format_result(result: &StepResult, structure: &Structure) -> String {
    match result {
        StepResult::Levels(levels) => {
            let rows: Vec<String> = levels
                .iter()
                .map(|level| format!("[{}]", join_values(level)))
                .collect();
            format!("[{}]", rows.join(", "))
        }
        StepResult::Range { sum, start, end } => {
            format!("sum {} over indices [{}, {}]", sum, start, end)
        }
        StepResult::Node(id) => match node_value(structure, *id) {
            Some(value) => format!("node #{} (value {})", id, value),
            None => format!("node #{}", id),
        },
        StepResult::Nodes(ids) => {
            let entries: Vec<String> = ids
                .iter()
                .map(|id| match node_value(structure, *id) {
                    Some(value) => format!("#{}={}", id, value),
                    None => format!("#{}", id),
                })
                .collect();
            format!("[{}]", entries.join(", "))
        }
        StepResult::Verdict(true) => "yes".to_string(),
        StepResult::Verdict(false) => "no".to_string(),
        StepResult::Array(values) => format!("[{}]", join_values(values)),
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text rendering of the input graph, one line per node
fn structure_lines(structure: &Structure) -> Vec<String> {
    match structure {
        Structure::Tree(tree) => tree_lines(tree),
        Structure::List(list) => list_lines(list),
        Structure::Lists(lists) => paired_lines(lists),
        Structure::Array(array) => {
            if array.is_empty() {
                vec!["(empty array)".to_string()]
            } else {
                vec![
                    format!("[{}]", join_values(array.values())),
                    format!("{} element(s)", array.len()),
                ]
            }
        }
    }
}

fn tree_lines(tree: &Tree) -> Vec<String> {
    let mut lines = Vec::new();
    match tree.root() {
        None => lines.push("(empty tree)".to_string()),
        Some(root) => push_tree_lines(tree, root, 0, "*", &mut lines),
    }
    lines
}

fn push_tree_lines(tree: &Tree, id: usize, depth: usize, tag: &str, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{} {} #{}",
        "  ".repeat(depth),
        tag,
        tree.value(id),
        id
    ));
    if let Some(left) = tree.left(id) {
        push_tree_lines(tree, left, depth + 1, "L", lines);
    }
    if let Some(right) = tree.right(id) {
        push_tree_lines(tree, right, depth + 1, "R", lines);
    }
}

fn list_lines(list: &List) -> Vec<String> {
    if list.is_empty() {
        return vec!["(empty list)".to_string()];
    }
    let mut lines = Vec::new();
    for node in list.nodes() {
        let next = match node.next {
            Some(id) => format!("#{}", id),
            None => "null".to_string(),
        };
        let random = match node.random {
            Some(id) => format!("  ~> #{}", id),
            None => String::new(),
        };
        lines.push(format!(
            "#{} [{}] -> {}{}",
            node.id, node.value, next, random
        ));
    }
    if let Some(entry) = list.cycle_entry() {
        lines.push(format!("tail loops back to #{}", entry));
    }
    lines
}

fn paired_lines(lists: &IntersectingLists) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(chain_line("A", lists, lists.head_a()));
    lines.push(chain_line("B", lists, lists.head_b()));
    match lists.join() {
        Some(join) => lines.push(format!("shared tail starts at #{}", join)),
        None => lines.push("no shared tail".to_string()),
    }
    lines
}

fn chain_line(label: &str, lists: &IntersectingLists, head: Option<usize>) -> String {
    let mut parts = Vec::new();
    let mut current = head;
    while let Some(id) = current {
        parts.push(format!("#{}[{}]", id, lists.value(id)));
        current = lists.next(id);
    }
    if parts.is_empty() {
        format!("{}: (empty)", label)
    } else {
        format!("{}: {}", label, parts.join(" -> "))
    }
}
