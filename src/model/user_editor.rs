use crate::model::{
    replace_by_id, FormErrors, Loadable, RecordId, Team, User, UserDraft, UserField, UserPatch,
};

/// How long the success banner stays up.
pub const BANNER_TIMEOUT_MS: u32 = 3000;

#[derive(Default, Debug, Clone, PartialEq)]
pub enum EditorState {
    #[default]
    Idle,
    Editing {
        original: User,
        draft: UserDraft,
        errors: FormErrors,
        server_error: Option<String>,
    },
    Submitting {
        original: User,
        draft: UserDraft,
    },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, EditorState::Submitting { .. })
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        match self {
            EditorState::Idle => None,
            EditorState::Editing { draft, .. } | EditorState::Submitting { draft, .. } => {
                Some(draft)
            }
        }
    }

    pub fn field_error(&self, field: UserField) -> Option<&str> {
        match self {
            EditorState::Editing { errors, .. } => errors.get(&field).map(String::as_str),
            _ => None,
        }
    }

    pub fn server_error(&self) -> Option<&str> {
        match self {
            EditorState::Editing { server_error, .. } => server_error.as_deref(),
            _ => None,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Banner {
    pub seq: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UsersAction {
    Loaded { users: Vec<User>, teams: Vec<Team> },
    LoadFailed(String),
    BeginEdit(User),
    Edit(UserField, String),
    ValidationFailed(FormErrors),
    SaveStarted,
    SaveSucceeded(User),
    SaveFailed(String),
    Cancel,
    DismissBanner(u32),
}

/// State of the users view: the fetched lists plus the edit workflow.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct UsersState {
    pub status: Loadable<()>,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub editor: EditorState,
    pub banner: Option<Banner>,
    next_banner_seq: u32,
}

pub fn success_message(user: &User) -> String {
    format!("User \"{}\" updated successfully!", user.name)
}

impl UsersState {
    pub fn new(users: Vec<User>, teams: Vec<Team>) -> Self {
        UsersState {
            status: Loadable::Loaded(()),
            users,
            teams,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: UsersAction) {
        match action {
            UsersAction::Loaded { users, teams } => {
                self.status = Loadable::Loaded(());
                self.users = users;
                self.teams = teams;
            }
            UsersAction::LoadFailed(message) => {
                self.status = Loadable::Failed(message);
            }
            UsersAction::BeginEdit(user) => {
                if self.editor.is_submitting() {
                    return;
                }
                self.editor = EditorState::Editing {
                    draft: UserDraft::from(&user),
                    original: user,
                    errors: FormErrors::new(),
                    server_error: None,
                };
            }
            UsersAction::Edit(field, value) => {
                if let EditorState::Editing { draft, errors, .. } = &mut self.editor {
                    draft.set(field, &value);
                    errors.remove(&field);
                }
            }
            UsersAction::ValidationFailed(new_errors) => {
                if let EditorState::Editing { errors, .. } = &mut self.editor {
                    *errors = new_errors;
                }
            }
            UsersAction::SaveStarted => {
                if let EditorState::Editing {
                    original, draft, ..
                } = &self.editor
                {
                    self.editor = EditorState::Submitting {
                        original: original.clone(),
                        draft: draft.clone(),
                    };
                }
            }
            UsersAction::SaveSucceeded(user) => {
                self.next_banner_seq += 1;
                self.banner = Some(Banner {
                    seq: self.next_banner_seq,
                    message: success_message(&user),
                });
                if !replace_by_id(&mut self.users, user) {
                    log::warn!("Updated user is not in the current list");
                }
                self.editor = EditorState::Idle;
            }
            UsersAction::SaveFailed(message) => {
                match std::mem::take(&mut self.editor) {
                    EditorState::Submitting { original, draft }
                    | EditorState::Editing {
                        original, draft, ..
                    } => {
                        self.editor = EditorState::Editing {
                            original,
                            draft,
                            errors: FormErrors::new(),
                            server_error: Some(message),
                        };
                    }
                    EditorState::Idle => {}
                }
            }
            UsersAction::Cancel => {
                if !self.editor.is_submitting() {
                    self.editor = EditorState::Idle;
                }
            }
            UsersAction::DismissBanner(seq) => {
                if self.banner.as_ref().is_some_and(|banner| banner.seq == seq) {
                    self.banner = None;
                }
            }
        }
    }

    /// Validates the open draft.
    ///
    /// Returns the request to send, or the action recording why it can't be sent.
    pub fn prepare_save(&self) -> Result<(RecordId, UserPatch), UsersAction> {
        match &self.editor {
            EditorState::Editing {
                original, draft, ..
            } => draft
                .validate(&self.teams)
                .map(|()| (original.id, draft.changes(original)))
                .map_err(UsersAction::ValidationFailed),
            _ => Err(UsersAction::ValidationFailed(FormErrors::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: RecordId, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("user{id}@octofit.io"),
            total_points: 10 * id,
            ..Default::default()
        }
    }

    fn state() -> UsersState {
        UsersState::new(
            vec![user(3, "Wanda"), user(7, "Peter"), user(9, "Diana")],
            vec![Team {
                id: 1,
                name: "Team Marvel".to_string(),
                ..Default::default()
            }],
        )
    }

    #[test]
    fn load_outcomes() {
        let mut state = UsersState::default();
        assert!(state.status.is_loading());

        state.apply(UsersAction::Loaded {
            users: vec![user(1, "Tony")],
            teams: Vec::new(),
        });
        assert_eq!(state.status, Loadable::Loaded(()));
        assert_eq!(state.users.len(), 1);

        let mut state = UsersState::default();
        state.apply(UsersAction::LoadFailed("HTTP error! status: 500".to_string()));
        assert_eq!(
            state.status,
            Loadable::Failed("HTTP error! status: 500".to_string())
        );
        assert!(state.users.is_empty());
    }

    #[test]
    fn begin_edit_prefills_draft() {
        let mut state = state();
        state.apply(UsersAction::BeginEdit(user(7, "Peter")));

        let draft = state.editor.draft().unwrap();
        assert_eq!(draft.name, "Peter");
        assert_eq!(draft.email, "user7@octofit.io");
        assert_eq!(draft.total_points, 70);
        assert!(state.editor.is_open());
    }

    #[test]
    fn invalid_draft_stays_editing() {
        let mut state = state();
        state.apply(UsersAction::BeginEdit(user(7, "Peter")));
        state.apply(UsersAction::Edit(UserField::Name, String::new()));

        let action = state.prepare_save().unwrap_err();
        state.apply(action);

        assert_eq!(state.editor.field_error(UserField::Name), Some("Name is required"));
        assert!(!state.editor.is_submitting());

        state.apply(UsersAction::Edit(UserField::Name, "P".to_string()));
        assert_eq!(state.editor.field_error(UserField::Name), None);
    }

    #[test]
    fn successful_save_patches_row_in_place() {
        let mut state = state();
        state.apply(UsersAction::BeginEdit(user(7, "Peter")));
        state.apply(UsersAction::Edit(UserField::Name, "New Name".to_string()));

        let (id, patch) = state.prepare_save().unwrap();
        assert_eq!(id, 7);
        assert_eq!(patch.name.as_deref(), Some("New Name"));

        state.apply(UsersAction::SaveStarted);
        assert!(state.editor.is_submitting());

        state.apply(UsersAction::SaveSucceeded(user(7, "New Name")));

        let names: Vec<&str> = state.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Wanda", "New Name", "Diana"]);
        assert_eq!(state.editor, EditorState::Idle);
        assert_eq!(
            state.banner.as_ref().unwrap().message,
            "User \"New Name\" updated successfully!"
        );
    }

    #[test]
    fn failed_save_reopens_form_with_message() {
        let mut state = state();
        let before = state.users.clone();
        state.apply(UsersAction::BeginEdit(user(7, "Peter")));
        state.apply(UsersAction::SaveStarted);
        state.apply(UsersAction::SaveFailed("email taken".to_string()));

        assert!(state.editor.is_open());
        assert!(!state.editor.is_submitting());
        assert_eq!(state.editor.server_error(), Some("email taken"));
        assert_eq!(state.users, before);
    }

    #[test]
    fn cancel_is_ignored_while_submitting() {
        let mut state = state();
        state.apply(UsersAction::BeginEdit(user(7, "Peter")));
        state.apply(UsersAction::SaveStarted);
        state.apply(UsersAction::Cancel);
        assert!(state.editor.is_submitting());

        state.apply(UsersAction::SaveFailed("boom".to_string()));
        state.apply(UsersAction::Cancel);
        assert_eq!(state.editor, EditorState::Idle);
    }

    #[test]
    fn stale_banner_timer_keeps_newer_banner() {
        let mut state = state();
        state.apply(UsersAction::SaveSucceeded(user(3, "Scarlet")));
        let first = state.banner.as_ref().unwrap().seq;
        state.apply(UsersAction::SaveSucceeded(user(9, "Wonder")));

        state.apply(UsersAction::DismissBanner(first));
        assert_eq!(
            state.banner.as_ref().unwrap().message,
            "User \"Wonder\" updated successfully!"
        );

        let second = state.banner.as_ref().unwrap().seq;
        state.apply(UsersAction::DismissBanner(second));
        assert_eq!(state.banner, None);
    }
}
