//! Provider identifiers and the fund source contract.

use std::fmt::{Display, Formatter};
use std::pin::Pin;

use futures::future;
use futures::stream::{BoxStream, Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::domain::FundSnapshot;
use crate::error::SourceError;

/// Canonical provider identifiers used in log fields and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Blackrock,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blackrock => "blackrock",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazy, strictly sequential stream of fund snapshots.
///
/// Nothing is fetched until the stream is polled. The first `Err` is the
/// last item: polling again yields `None` and issues no further request.
pub type FundStream<'a> =
    Pin<Box<dyn Stream<Item = Result<FundSnapshot, SourceError>> + Send + 'a>>;

/// Ends `stream` right after its first `Err`.
pub(crate) fn end_on_error<'a, S, T, E>(stream: S) -> BoxStream<'a, Result<T, E>>
where
    S: Stream<Item = Result<T, E>> + Send + 'a,
    T: Send + 'a,
    E: Send + 'a,
{
    stream
        .scan(false, |failed, item| {
            if *failed {
                return future::ready(None);
            }
            *failed = item.is_err();
            future::ready(Some(item))
        })
        .boxed()
}

/// A provider that can enumerate funds together with their holdings.
pub trait FundSource: Send + Sync {
    fn id(&self) -> ProviderId;

    fn funds(&self) -> FundStream<'_>;
}
