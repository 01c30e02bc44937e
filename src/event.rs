use super::*;

pub(crate) enum Event {
  CommentSubmitted {
    game_id: String,
    result: Result<CommentSubmission>,
  },
  Comments {
    game_id: String,
    request_id: u64,
    result: Result<Vec<Comment>>,
  },
  Downloaded {
    game_id: String,
    result: Result<DownloadResponse>,
  },
  PageReloaded {
    result: Result<Page>,
  },
}
