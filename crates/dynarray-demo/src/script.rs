//! Scripted walk through the container's public operations.
//!
//! A script is a slice of [`Step`]s executed in order against a fresh
//! `DynamicArray<i32>`. Printing steps write to any [`Write`] sink, so the
//! binary targets stdout and tests target a byte buffer.

use std::io::Write;

use anyhow::{Context, Result};
use dynarray::DynamicArray;

use crate::config::DemoConfig;

/// One operation in a demo script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Append a value.
    Push(i32),
    /// Remove the element at an index.
    Remove(usize),
    /// Remove the last element.
    Pop,
    /// Print the current contents.
    Print,
    /// Print whether the array is empty.
    CheckEmpty,
}

/// The standard demonstration: build `[1, 2, 3]`, then take it apart.
pub const DEMO_SCRIPT: &[Step] = &[
    Step::Push(1),
    Step::Push(2),
    Step::Push(3),
    Step::Print,
    Step::Remove(1),
    Step::Print,
    Step::Pop,
    Step::Print,
    Step::CheckEmpty,
    Step::Pop,
    Step::Print,
    Step::CheckEmpty,
];

/// Run `steps` against a new array, writing printed output to `out`.
///
/// Stops at the first failing step. Container errors keep their
/// [`dynarray::ArrayError`] as the root cause, with the failing step as context.
pub fn run_script<W: Write>(
    steps: &[Step],
    out: &mut W,
    config: &DemoConfig,
) -> Result<DynamicArray<i32>> {
    let mut array = DynamicArray::new();
    for (index, step) in steps.iter().enumerate() {
        apply(&mut array, *step, out, config)
            .with_context(|| format!("step {index} ({step:?}) failed"))?;
    }
    out.flush().context("flushing script output")?;
    Ok(array)
}

fn apply<W: Write>(
    array: &mut DynamicArray<i32>,
    step: Step,
    out: &mut W,
    config: &DemoConfig,
) -> Result<()> {
    match step {
        Step::Push(value) => {
            array.push(value);
            tracing::debug!(value, len = array.len(), capacity = array.capacity(), "push");
        }
        Step::Remove(index) => {
            let removed = array.remove(index)?;
            tracing::debug!(index, removed, len = array.len(), "remove");
        }
        Step::Pop => {
            let popped = array.pop()?;
            tracing::debug!(popped, len = array.len(), "pop");
        }
        Step::Print => {
            if config.show_capacity {
                writeln!(
                    out,
                    "{array} (len {}, capacity {})",
                    array.len(),
                    array.capacity()
                )?;
            } else {
                writeln!(out, "{array}")?;
            }
        }
        Step::CheckEmpty => {
            writeln!(out, "Is the array empty? {}", array.is_empty())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynarray::ArrayError;

    fn run_to_string(steps: &[Step], config: &DemoConfig) -> (Result<DynamicArray<i32>>, String) {
        let mut buf = Vec::new();
        let result = run_script(steps, &mut buf, config);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn empty_script_prints_nothing() {
        let (result, output) = run_to_string(&[], &DemoConfig::new());
        assert!(result.unwrap().is_empty());
        assert!(output.is_empty());
    }

    #[test]
    fn returns_final_array() {
        let steps = [Step::Push(4), Step::Push(5), Step::Remove(0)];
        let (result, _) = run_to_string(&steps, &DemoConfig::new());
        let array = result.unwrap();
        assert_eq!(array, [5]);
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    fn show_capacity_appends_len_and_capacity() {
        let config = DemoConfig {
            show_capacity: true,
            ..DemoConfig::new()
        };
        let steps = [Step::Push(1), Step::Push(2), Step::Push(3), Step::Print];
        let (_, output) = run_to_string(&steps, &config);
        assert_eq!(output, "[1, 2, 3] (len 3, capacity 4)\n");
    }

    #[test]
    fn pop_on_empty_stops_script_with_root_cause() {
        let steps = [Step::Print, Step::Pop, Step::Print];
        let (result, output) = run_to_string(&steps, &DemoConfig::new());
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArrayError>(),
            Some(&ArrayError::EmptyContainer)
        );
        assert!(err.to_string().contains("step 1 (Pop)"));
        // Output written before the failure is kept; nothing after it.
        assert_eq!(output, "[]\n");
    }

    #[test]
    fn remove_past_end_reports_index() {
        let steps = [Step::Push(1), Step::Remove(1)];
        let (result, _) = run_to_string(&steps, &DemoConfig::new());
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArrayError>(),
            Some(&ArrayError::IndexOutOfRange { index: 1, len: 1 })
        );
    }
}
