//! Operation sequence for building the pane grid.
//!
//! iTerm2 has no random pane addressing from the keyboard. Every operation
//! acts on the focused pane, and the only way to move focus is to cycle to
//! the next pane (`cmd-]`), which visits panes column by column, top to
//! bottom, wrapping from the last pane back to the first. A split inserts
//! the new pane directly after the split pane in that order and focuses it.
//!
//! [`generate`] walks three phases:
//!
//! 1. Build the columns: split the right-most pane vertically once per extra
//!    column.
//! 2. Build the rows: cycle to the top of each column and split it
//!    horizontally once per extra row in that column.
//! 3. Write the commands: cycle back to the first pane and type each command,
//!    advancing focus after each one.
//!
//! Focus movement is computed from a `(panes, focused)` model of the
//! terminal, so exactly as many `FocusNext` steps are emitted as needed.

use crate::config::Settings;
use crate::error::{GridError, Result};
use crate::layout::{layout, GridSpec, PaneAssignment};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, trace};

/// One step of the automation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Open a new tab with a single, focused pane.
    NewTab,
    /// Split the focused pane side by side; the new right pane takes focus.
    SplitVertical,
    /// Split the focused pane top and bottom; the new bottom pane takes focus.
    SplitHorizontal,
    /// Move focus to the next pane, wrapping to the first.
    FocusNext,
    /// Pause to let the terminal catch up.
    Delay(Duration),
    /// Type a command into the focused pane and press return.
    WriteText(String),
}

impl Operation {
    /// True for the two split operations.
    pub fn is_split(&self) -> bool {
        matches!(self, Operation::SplitVertical | Operation::SplitHorizontal)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::NewTab => write!(f, "new-tab"),
            Operation::SplitVertical => write!(f, "split-vertical"),
            Operation::SplitHorizontal => write!(f, "split-horizontal"),
            Operation::FocusNext => write!(f, "focus-next"),
            Operation::Delay(d) => write!(f, "delay {}", d.as_secs_f64()),
            Operation::WriteText(text) => write!(f, "write {:?}", text),
        }
    }
}

/// Tunables threaded through to the operation sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptOptions {
    /// Pause emitted before each split and each typed command.
    pub delay: Duration,
    /// Open a new tab instead of splitting the current one.
    pub new_tab: bool,
}

impl ScriptOptions {
    /// Build options from a delay in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDelay`] if `seconds` is negative or not finite.
    pub fn new(delay_seconds: f64, new_tab: bool) -> Result<Self> {
        let delay = Duration::try_from_secs_f64(delay_seconds)
            .map_err(|_| GridError::InvalidDelay(delay_seconds))?;
        Ok(Self { delay, new_tab })
    }
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(250),
            new_tab: true,
        }
    }
}

/// Generation phase. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Phase {
    BuildingColumns,
    BuildingRows(usize),
    WritingCommands,
    Done,
}

/// Operation builder with a model of the terminal's focus.
struct Sequencer {
    ops: Vec<Operation>,
    delay: Duration,
    phase: Phase,
    /// Panes that exist so far.
    panes: usize,
    /// Traversal index of the focused pane.
    focused: usize,
}

impl Sequencer {
    fn new(options: &ScriptOptions) -> Self {
        Self {
            ops: Vec::new(),
            delay: options.delay,
            phase: Phase::BuildingColumns,
            panes: 1,
            focused: 0,
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug_assert!(phase >= self.phase, "{:?} after {:?}", phase, self.phase);
        trace!(?phase, ops = self.ops.len(), "entering phase");
        self.phase = phase;
    }

    fn push(&mut self, op: Operation) {
        trace!(phase = ?self.phase, %op, "emit");
        self.ops.push(op);
    }

    fn pause(&mut self) {
        self.push(Operation::Delay(self.delay));
    }

    fn split(&mut self, op: Operation) {
        self.pause();
        self.push(op);
        self.panes += 1;
        self.focused += 1;
    }

    /// Cycle focus forward until the pane at traversal index `target` has it.
    fn focus(&mut self, target: usize) {
        let steps = (target + self.panes - self.focused) % self.panes;
        for _ in 0..steps {
            self.push(Operation::FocusNext);
        }
        self.focused = target;
    }
}

/// Generate the operations that build `grid` and type each command into its pane.
///
/// Returns an empty sequence when there are no commands, without opening a
/// tab.
///
/// # Panics
///
/// Panics if `assignment` was not built from `commands` (their lengths differ).
pub fn generate(
    grid: &GridSpec,
    assignment: &PaneAssignment,
    commands: &[String],
    options: &ScriptOptions,
) -> Vec<Operation> {
    assert_eq!(
        assignment.len(),
        commands.len(),
        "assignment does not match the command list"
    );
    if assignment.is_empty() {
        debug!("no commands, nothing to generate");
        return Vec::new();
    }

    let heights = assignment.column_heights();
    let mut seq = Sequencer::new(options);

    if options.new_tab {
        seq.push(Operation::NewTab);
    }
    for _ in 1..grid.columns {
        seq.split(Operation::SplitVertical);
    }

    // Panes before column j are already stacked; column j and later are
    // still single panes, so the top of column j sits at index `top`.
    let mut top = 0;
    for (column, &height) in heights.iter().enumerate() {
        seq.enter(Phase::BuildingRows(column));
        if height > 1 {
            seq.focus(top);
            for _ in 1..height {
                seq.split(Operation::SplitHorizontal);
            }
        }
        top += height;
    }

    seq.enter(Phase::WritingCommands);
    seq.focus(0);
    let order = assignment.traversal();
    for (position, &index) in order.iter().enumerate() {
        seq.pause();
        seq.push(Operation::WriteText(commands[index].clone()));
        seq.focus((position + 1) % seq.panes);
    }
    seq.enter(Phase::Done);

    debug!(
        columns = grid.columns,
        rows = grid.rows,
        panes = seq.panes,
        ops = seq.ops.len(),
        "generated operation sequence"
    );
    seq.ops
}

/// Lay out `commands` and generate their operations using `settings`.
///
/// # Errors
///
/// Returns [`GridError::InvalidDelay`] if the configured delay is unusable.
pub fn plan(commands: &[String], settings: &Settings) -> Result<Vec<Operation>> {
    let options = settings.script_options()?;
    let (grid, assignment) = layout(commands, settings.columns, settings.fill);
    if settings.debug {
        info!(
            columns = grid.columns,
            rows = grid.rows,
            delay = settings.delay,
            ?commands,
            "computed layout"
        );
    } else {
        debug!(?grid, fill = ?settings.fill, "computed layout");
    }
    Ok(generate(&grid, &assignment, commands, &options))
}
