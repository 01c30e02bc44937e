use super::*;

#[derive(Debug, Serialize)]
pub(crate) struct NewComment<'a> {
  pub(crate) content: &'a str,
  pub(crate) game_id: &'a str,
}
