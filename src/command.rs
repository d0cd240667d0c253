use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelInput,
  ClosePost,
  ComposeComment,
  ComposePost,
  HideHelp,
  None,
  OpenCurrentInBrowser,
  OpenSelected,
  PageDown,
  PageUp,
  Quit,
  Refresh,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartTopic,
  SubmitInput,
  SwitchTabLeft,
  SwitchTabRight,
  Vote(VoteDirection),
}
