use std::future::Future;

use tracing::{debug, warn};

use super::{
    errors::{Error, Result},
    params::PageSize,
};

/// Record exposing the ordering field used as a watermark cursor.
pub(crate) trait Watermarked {
    fn watermark(&self) -> i64;
}

impl Watermarked for crate::models::Swap {
    fn watermark(&self) -> i64 {
        self.timestamp
    }
}

/// Number of offset pages needed to cover `total` records.
pub(crate) fn page_count(total: u64, page_size: PageSize) -> u64 {
    total.div_ceil(u64::from(page_size.get()))
}

/// Walks `pages` offset pages (`skip = page * page_size`).
///
/// The page count is trusted as computed up front, but a short page ends
/// the walk early since the remote has nothing past it.
pub(crate) async fn paginate_offset<T, F, Fut>(
    page_size: PageSize,
    pages: u64,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut items = Vec::new();
    for page in 0..pages {
        let skip = page * u64::from(page_size.get());
        let batch = fetch(skip).await?;
        let received = batch.len();
        debug!(page, skip, received, "fetched offset page");
        items.extend(batch);

        if received < page_size.as_usize() {
            if page + 1 < pages {
                warn!(
                    page,
                    expected_pages = pages,
                    "short page before the expected page count; stopping early"
                );
            }
            break;
        }
    }
    Ok(items)
}

/// Walks a timestamp watermark until the remote returns a short page.
///
/// The remote must return each page ordered ascending by the watermark
/// field. The next lower bound is the page maximum, so the boundary record
/// is fetched twice; callers deduplicate by id. A page that fails to move
/// the watermark forward, or more than `max_pages` pages, is reported as
/// [`Error::PaginationInconsistency`].
pub(crate) async fn paginate_watermark<T, F, Fut>(
    start: i64,
    page_size: PageSize,
    max_pages: usize,
    mut fetch: F,
) -> Result<Vec<T>>
where
    T: Watermarked,
    F: FnMut(i64) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut watermark = start;
    let mut items = Vec::new();
    let mut pages = 0usize;

    loop {
        if pages >= max_pages {
            return Err(Error::PaginationInconsistency {
                pages,
                watermark,
                why: "page cap reached before the remote was exhausted",
            });
        }

        let batch = fetch(watermark).await?;
        pages += 1;
        let received = batch.len();
        let next = batch.iter().map(Watermarked::watermark).max();
        debug!(page = pages, watermark, received, "fetched watermark page");
        items.extend(batch);

        if received < page_size.as_usize() {
            return Ok(items);
        }

        match next {
            Some(next) if next > watermark => watermark = next,
            _ => {
                return Err(Error::PaginationInconsistency {
                    pages,
                    watermark,
                    why: "full page did not advance the watermark",
                })
            }
        }
    }
}
