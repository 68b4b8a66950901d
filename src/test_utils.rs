//! Shared helpers for tests: a test server over the real router and a seed
//! dataset mirroring the project's fixture shape.

use crate::{AppState, Config, build_router};
use axum_test::TestServer;
use sqlx::{Executor, PgPool};

/// Build a test server over the full router, backed by the given pool.
pub fn create_test_app(pool: PgPool) -> TestServer {
    let state = AppState {
        db: pool,
        config: Config::default(),
    };
    TestServer::new(build_router(state)).expect("Failed to create test server")
}

const SEED: &str = r#"
INSERT INTO topics (slug, description) VALUES
    ('mitch', 'The man, the Mitch, the legend'),
    ('cats', 'Not dogs'),
    ('paper', 'what books are made of');

INSERT INTO users (username, name, avatar_url) VALUES
    ('butter_bridge', 'jonny', 'https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg'),
    ('icellusedkars', 'sam', 'https://avatars2.githubusercontent.com/u/24604688?s=460&v=4'),
    ('rogersop', 'paul', 'https://avatars2.githubusercontent.com/u/24394918?s=400&v=4'),
    ('lurker', 'do_nothing', 'https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png');

INSERT INTO articles (article_id, title, topic, author, body, created_at, votes) VALUES
    (1, 'Living in the shadow of a great man', 'mitch', 'butter_bridge',
     'I find this existence challenging', '2020-07-09T20:11:00Z', 100),
    (2, 'Sony Vaio; or, The Laptop', 'mitch', 'icellusedkars',
     'Call me Mitchell. Some years ago..', '2020-10-16T05:03:00Z', 0),
    (3, 'Eight pug gifs that remind me of mitch', 'mitch', 'icellusedkars',
     'some gifs', '2020-11-03T09:12:00Z', 0),
    (4, 'Student SUES Mitch!', 'mitch', 'rogersop',
     'We all love Mitch and his wonderful, unique typing style. However, the volume of his typing has ALLEGEDLY burst another students eardrums, and they are now suing for damages',
     '2020-05-06T01:14:00Z', 0),
    (5, 'UNCOVERED: catspiracy to bring down democracy', 'cats', 'rogersop',
     'Bastet walks amongst us, and the cats are taking arms!', '2020-08-03T13:14:00Z', 0);

INSERT INTO comments (comment_id, article_id, author, body, votes, created_at) VALUES
    (1, 1, 'butter_bridge', 'Oh, I''ve got compassion running out of my nose, pal!', 16, '2020-04-06T12:17:00Z'),
    (2, 1, 'icellusedkars', 'I hate streaming noses', 0, '2020-01-01T03:08:00Z'),
    (3, 5, 'lurker', 'Fascinating.', 1, '2020-09-19T23:10:00Z');

SELECT setval('articles_article_id_seq', (SELECT MAX(article_id) FROM articles));
SELECT setval('comments_comment_id_seq', (SELECT MAX(comment_id) FROM comments));
"#;

/// Seed the test database. Migrations have already run via `#[sqlx::test]`.
pub async fn seed_test_data(pool: &PgPool) {
    pool.execute(SEED).await.expect("Failed to seed test data");
}
