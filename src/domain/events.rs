/// State updates emitted by the poll loop toward the presentation layer.
///
/// The poll thread and the presentation run in different execution contexts;
/// these events cross that boundary through an mpsc channel and must carry
/// fully rendered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The full rendered message list after a successful fetch, plus how
    /// many of its entries were not in the previous snapshot.
    MessagesUpdated {
        lines: Vec<String>,
        new_count: usize,
    },
    /// The current typing banner, possibly empty.
    TypingBanner(String),
}
