// algotty: algorithm trace visualizer for the terminal

mod algos;
mod input;
mod playback;
mod structure;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algos::{
    Algorithm, BstVariant, KthVariant, MaxSubarrayVariant, RotateVariant, SymmetryVariant,
    TreeVariant,
};
use input::InputError;
use playback::Playback;
use structure::{BoundedArray, IntersectingLists, List, Structure, Tree};
use trace::Trace;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");
        eprintln!("Error: Not enough arguments");
        eprintln!();
        eprintln!("Usage: {} <algorithm> <input> [params...]", program_name);
        eprintln!();
        eprintln!("Algorithms (family[:variant]):");
        eprintln!("  level-order[:bfs|dfs]        <tree>        e.g. \"[3,9,20,null,null,15,7]\"");
        eprintln!("  invert[:bfs|dfs]             <tree>");
        eprintln!("  right-view[:bfs|dfs]         <tree>");
        eprintln!("  symmetry[:recursive|iterative] <tree>");
        eprintln!("  validate-bst[:range|inorder] <tree>");
        eprintln!("  kth[:stack|recursive]        <tree> <k>");
        eprintln!("  max-subarray[:kadane|divide] <array>");
        eprintln!("  rotate[:reversal|aux|cyclic] <array> <k>");
        eprintln!("  cycle                        <list> [entry-index|-1]");
        eprintln!("  intersect                    <listA> <listB> <skipA> <skipB>");
        eprintln!("  random-copy                  <pairs>        e.g. \"[[7,null],[13,0]]\"");
        std::process::exit(1);
    }

    let Some(algorithm) = Algorithm::parse(&args[1]) else {
        eprintln!("Error: Unknown algorithm '{}'", args[1]);
        std::process::exit(1);
    };

    let (structure, trace) = match build_session(algorithm, &args[2..]) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!("{}: {} step(s) recorded.", algorithm.title(), trace.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        Playback::new(trace),
        structure,
        algorithm.title().to_string(),
    );
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Normalize the raw arguments for the chosen algorithm, build its structure,
/// and run the generator to completion.
fn build_session(algorithm: Algorithm, params: &[String]) -> Result<(Structure, Trace), InputError> {
    let require = |index: usize, what: &'static str| -> Result<&str, InputError> {
        params
            .get(index)
            .map(|s| s.as_str())
            .ok_or(InputError::Empty { what })
    };

    match algorithm {
        Algorithm::LevelOrder(variant)
        | Algorithm::Invert(variant)
        | Algorithm::RightView(variant) => {
            let tree = build_tree(require(0, "tree literal")?)?;
            let trace = match (algorithm, variant) {
                (Algorithm::LevelOrder(_), TreeVariant::Bfs) => {
                    algos::level_order::breadth_first(&tree)
                }
                (Algorithm::LevelOrder(_), TreeVariant::Dfs) => {
                    algos::level_order::depth_first(&tree)
                }
                (Algorithm::Invert(_), TreeVariant::Bfs) => algos::invert::breadth_first(&tree),
                (Algorithm::Invert(_), TreeVariant::Dfs) => algos::invert::depth_first(&tree),
                (_, TreeVariant::Bfs) => algos::right_view::breadth_first(&tree),
                (_, TreeVariant::Dfs) => algos::right_view::depth_first(&tree),
            };
            Ok((Structure::Tree(tree), trace))
        }
        Algorithm::Symmetry(variant) => {
            let tree = build_tree(require(0, "tree literal")?)?;
            let trace = match variant {
                SymmetryVariant::Recursive => algos::symmetry::recursive(&tree),
                SymmetryVariant::Iterative => algos::symmetry::iterative(&tree),
            };
            Ok((Structure::Tree(tree), trace))
        }
        Algorithm::ValidateBst(variant) => {
            let tree = build_tree(require(0, "tree literal")?)?;
            let trace = match variant {
                BstVariant::Range => algos::bst::range_check(&tree),
                BstVariant::Inorder => algos::bst::inorder_check(&tree),
            };
            Ok((Structure::Tree(tree), trace))
        }
        Algorithm::KthSmallest(variant) => {
            let tree = build_tree(require(0, "tree literal")?)?;
            let k = input::parse_kth(require(1, "k")?, tree.node_count())?;
            let trace = match variant {
                KthVariant::Stack => algos::kth_smallest::explicit_stack(&tree, k),
                KthVariant::Recursive => algos::kth_smallest::recursive(&tree, k),
            };
            Ok((Structure::Tree(tree), trace))
        }
        Algorithm::MaxSubarray(variant) => {
            let parsed = input::parse_array(require(0, "array literal")?)?;
            let array = BoundedArray::new(parsed.values);
            let trace = match variant {
                MaxSubarrayVariant::Kadane => algos::max_subarray::kadane(&array),
                MaxSubarrayVariant::DivideConquer => algos::max_subarray::divide_and_conquer(&array),
            };
            Ok((Structure::Array(array), trace))
        }
        Algorithm::Rotate(variant) => {
            let parsed = input::parse_array(require(0, "array literal")?)?;
            let k = input::parse_rotation(require(1, "rotation amount")?)?;
            let array = BoundedArray::new(parsed.values);
            let trace = match variant {
                RotateVariant::Aux => algos::rotate::auxiliary(&array, k),
                RotateVariant::Cyclic => algos::rotate::cyclic(&array, k),
                RotateVariant::Reversal => algos::rotate::reversal(&array, k),
            };
            Ok((Structure::Array(array), trace))
        }
        Algorithm::CycleDetect => {
            let parsed = input::parse_list(
                require(0, "list literal")?,
                params.get(1).map(|s| s.as_str()),
            )?;
            let list = List::from_values(&parsed.values, parsed.cycle);
            let trace = algos::cycle::detect(&list);
            Ok((Structure::List(list), trace))
        }
        Algorithm::Intersection => {
            let parsed = input::parse_paired(
                require(0, "list A literal")?,
                require(1, "list B literal")?,
                require(2, "join offset for list A")?,
                require(3, "join offset for list B")?,
            )?;
            let lists =
                IntersectingLists::build(&parsed.a, &parsed.b, parsed.skip_a, parsed.skip_b);
            let trace = algos::intersect::find(&lists);
            Ok((Structure::Lists(lists), trace))
        }
        Algorithm::RandomCopy => {
            let parsed = input::parse_random(require(0, "pair list literal")?)?;
            let list = List::with_random(&parsed.entries);
            let trace = algos::random_copy::deep_copy(&list);
            Ok((Structure::List(list), trace))
        }
    }
}

fn build_tree(raw: &str) -> Result<Tree, InputError> {
    let parsed = input::parse_tree(raw)?;
    Ok(Tree::from_level_order(&parsed.slots))
}
