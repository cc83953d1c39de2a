pub mod board;
pub mod card;
pub mod export;
pub mod list;

use tacky_domain::HierarchyError;

/// Hierarchy rejections are reported like any other command failure.
pub(crate) fn rejected(err: HierarchyError) -> anyhow::Error {
    anyhow::anyhow!(err)
}
