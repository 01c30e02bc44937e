#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  ActivateNav(usize),
  CancelComment,
  DismissNotice,
  Download,
  HideHelp,
  NextView,
  None,
  PreviousView,
  Quit,
  RefreshComments,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartComment,
  SubmitComment,
}
