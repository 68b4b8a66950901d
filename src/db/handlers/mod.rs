//! Repository implementations for each entity.
//!
//! A repository translates a domain operation into a parameterized query and
//! back into plain records. Repositories are constructed from a borrowed
//! connection so callers control acquisition and release:
//!
//! ```ignore
//! let mut conn = pool.acquire().await?;
//! let mut repo = Articles::new(&mut conn);
//! let article = repo.get_by_id(4).await?;
//! ```

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

pub use articles::{ArticleFilter, Articles, SortBy, SortOrder};
pub use comments::Comments;
pub use topics::Topics;
pub use users::Users;
