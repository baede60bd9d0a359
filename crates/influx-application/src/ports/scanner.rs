//! Declaration scanner port

use influx_domain::error::Result;
use influx_domain::value_objects::ComponentDeclaration;

/// Declarations discovered for one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBatch {
    /// Origin of the batch (a file path, a round name), shown in reports
    pub source: Option<String>,
    /// Candidate components, possibly including ones already seen
    pub declarations: Vec<ComponentDeclaration>,
}

impl DeclarationBatch {
    /// Batch without a named source
    pub fn new(declarations: Vec<ComponentDeclaration>) -> Self {
        Self {
            source: None,
            declarations,
        }
    }

    /// Attach the batch origin
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Source of component declarations
///
/// Each call to [`next_batch`](Self::next_batch) yields the declarations of
/// one pass. A scanner may deliver the same identity more than once across
/// passes; the pipeline filters re-deliveries.
pub trait DeclarationScanner {
    /// Next batch, or `None` once discovery is exhausted
    fn next_batch(&mut self) -> Result<Option<DeclarationBatch>>;
}

impl<S: DeclarationScanner + ?Sized> DeclarationScanner for Box<S> {
    fn next_batch(&mut self) -> Result<Option<DeclarationBatch>> {
        (**self).next_batch()
    }
}

/// In-memory scanner that replays a fixed sequence of batches
#[derive(Debug, Clone, Default)]
pub struct StaticDeclarationScanner {
    batches: std::collections::VecDeque<DeclarationBatch>,
}

impl StaticDeclarationScanner {
    pub fn new(batches: impl IntoIterator<Item = DeclarationBatch>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }
}

impl DeclarationScanner for StaticDeclarationScanner {
    fn next_batch(&mut self) -> Result<Option<DeclarationBatch>> {
        Ok(self.batches.pop_front())
    }
}
