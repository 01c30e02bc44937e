#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  Download {
    game_id: String,
  },
  FetchComments {
    game_id: String,
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
  ReloadPage,
  SubmitComment {
    content: String,
    game_id: String,
  },
}
