use crate::command::DrawCommand;

/// The drawing history: an ordered display list of committed commands plus
/// the stack of undone ones.
///
/// Insertion order is z-order is paint order. Undo and redo move commands
/// between the two stacks without copying; commands are only destroyed by
/// `clear`.
#[derive(Debug, Default)]
pub struct Document {
    commands: Vec<DrawCommand>,
    redo_stack: Vec<DrawCommand>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the display list. Committing forks history, so
    /// any undone commands are discarded.
    pub fn commit(&mut self, command: DrawCommand) {
        self.redo_stack.clear();
        self.commands.push(command);
        log::debug!("committed command #{}", self.commands.len());
    }

    /// Move the most recent command onto the redo stack. No-op when the
    /// display list is empty.
    pub fn undo(&mut self) {
        if let Some(command) = self.commands.pop() {
            self.redo_stack.push(command);
            log::debug!("undo ({} remaining)", self.commands.len());
        }
    }

    /// Move the most recently undone command back onto the display list.
    /// No-op when the redo stack is empty.
    pub fn redo(&mut self) {
        if let Some(command) = self.redo_stack.pop() {
            self.commands.push(command);
            log::debug!("redo ({} total)", self.commands.len());
        }
    }

    /// Wipe both stacks.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.redo_stack.clear();
        log::debug!("cleared document");
    }

    pub fn can_undo(&self) -> bool {
        !self.commands.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The committed commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The undone commands, oldest first; the last element is the next
    /// redo candidate.
    pub fn redo_commands(&self) -> &[DrawCommand] {
        &self.redo_stack
    }

    /// Mutable access to the most recently committed command.
    ///
    /// While a drag is active this is the in-progress command, so drag
    /// mutations are immediately visible through the display list.
    pub fn last_mut(&mut self) -> Option<&mut DrawCommand> {
        self.commands.last_mut()
    }
}
