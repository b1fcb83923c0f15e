//! Shared stepping for presentation commands

use crate::{cli::StepArgs, output, slides::SlideSequence};

/// Print the opening slide, then every slide reached by the requested steps
///
/// Stepping stops in a direction as soon as the sequence is exhausted.
/// Returns the sequence with its final cursor.
pub fn step_through(mut sequence: SlideSequence, steps: &StepArgs, quiet: bool) -> SlideSequence {
    println!("{}", output::slide(&sequence.info(), quiet));

    for _ in 0..steps.forward {
        if sequence.advance().is_exhausted() {
            report_end(quiet);
            break;
        }
        println!("{}", output::slide(&sequence.info(), quiet));
    }

    for _ in 0..steps.backward {
        if sequence.retreat().is_exhausted() {
            report_end(quiet);
            break;
        }
        println!("{}", output::slide(&sequence.info(), quiet));
    }

    sequence
}

fn report_end(quiet: bool) {
    if !quiet {
        println!("End of presentation.");
    }
}
