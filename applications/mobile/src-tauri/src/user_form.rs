//! Form screen Tauri commands
//!
//! Creating or editing a single record. The form validates the required
//! fields, decides the avatar exactly once at save time, and rewrites the
//! whole collection through the store. Validation failures and write
//! failures both surface as blocking modals; neither is a command error.

use agenda_core::types::{Avatar, UserId, UserRecord};
use agenda_core::UserStore;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::app_state::AppState;
use crate::user_list::{FormRouteParams, FrontendUser};

/// Emoji strip offered by the avatar picker
pub const AVATAR_EMOJIS: [&str; 13] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐸", "🐵",
];

/// Preset public avatar images offered by the picker
pub const PRESET_AVATARS: [&str; 8] = [
    "https://cdn.pixabay.com/photo/2016/11/18/23/38/child-1837375_960_720.png",
    "https://cdn.pixabay.com/photo/2016/11/29/13/14/attractive-1868314_960_720.jpg",
    "https://cdn.pixabay.com/photo/2017/02/16/23/10/smile-2072907_960_720.jpg",
    "https://cdn.pixabay.com/photo/2016/11/21/12/42/beard-1845166_960_720.jpg",
    "https://cdn.pixabay.com/photo/2015/01/08/18/29/entrepreneur-593358_960_720.jpg",
    "https://cdn.pixabay.com/photo/2015/07/20/12/57/ambassador-852766_960_720.jpg",
    "https://cdn.pixabay.com/photo/2016/11/29/20/22/girl-1871104_960_720.jpg",
    "https://cdn.pixabay.com/photo/2017/04/01/21/06/portrait-2194457_960_720.jpg",
];

/// The selectable avatar strips shown by the form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarOptions {
    pub emojis: Vec<String>,
    pub preset_urls: Vec<String>,
}

/// One of the three mutually exclusive avatar input modes.
///
/// The strips and the URL field all write into the same slot, so the last
/// selection wins; the command receives only the final one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum AvatarSelection {
    /// A glyph chosen from the emoji strip
    Emoji(String),
    /// A preset image chosen from the public strip
    Preset(String),
    /// A freehand URL typed into the text field; only considered when it
    /// starts with the HTTP prefix
    CustomUrl(String),
}

/// Blocking modal dialog content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormModal {
    pub title: String,
    pub message: String,
    pub button_label: String,
}

/// Fixed modal shown when a required field is empty
pub fn validation_modal() -> FormModal {
    FormModal {
        title: "Ops!".to_string(),
        message: "Todos os campos devem ser preenchidos!".to_string(),
        button_label: "OK".to_string(),
    }
}

/// Generic modal shown when persisting fails
pub fn save_error_modal() -> FormModal {
    FormModal {
        title: "Erro".to_string(),
        message: "Não foi possível salvar o usuário".to_string(),
        button_label: "OK".to_string(),
    }
}

/// Form submission phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Persisting,
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Record persisted; the screen navigates back to the list
    Saved { user: FrontendUser },
    /// Submission rejected; show the modal and stay on the form
    Rejected { modal: FormModal },
}

/// The form screen's in-memory state
#[derive(Debug, Clone)]
pub struct UserForm {
    /// Editing target; `None` on the create path
    editing: Option<UserId>,
    pub name: String,
    pub email: String,
    /// Avatar carried in from the edited record's route parameters
    initial_avatar: Avatar,
    /// Active avatar selection, if any
    selection: Option<AvatarSelection>,
    phase: FormPhase,
}

impl Default for UserForm {
    fn default() -> Self {
        Self::create()
    }
}

impl UserForm {
    /// Blank form (create path)
    pub fn create() -> Self {
        Self {
            editing: None,
            name: String::new(),
            email: String::new(),
            initial_avatar: Avatar::Default,
            selection: None,
            phase: FormPhase::Idle,
        }
    }

    /// Form initialized from the route parameters of an edit navigation
    pub fn from_route_params(params: &FormRouteParams) -> Self {
        let editing = (params.is_editing == "true").then(|| UserId::new(params.id.clone()));

        Self {
            editing,
            name: params.name.clone(),
            email: params.email.clone(),
            initial_avatar: Avatar::classify(&params.avatar_url),
            selection: None,
            phase: FormPhase::Idle,
        }
    }

    /// Pick a glyph from the emoji strip
    pub fn select_emoji(&mut self, glyph: impl Into<String>) {
        self.selection = Some(AvatarSelection::Emoji(glyph.into()));
    }

    /// Pick a preset image from the public strip
    pub fn select_preset(&mut self, url: impl Into<String>) {
        self.selection = Some(AvatarSelection::Preset(url.into()));
    }

    /// Type into the freehand URL field
    pub fn set_custom_url(&mut self, text: impl Into<String>) {
        self.selection = Some(AvatarSelection::CustomUrl(text.into()));
    }

    /// Current submission phase
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The avatar this form would save right now.
    ///
    /// The active selection wins; a freehand URL without the HTTP prefix is
    /// not considered a selection at all. With no usable selection the
    /// avatar carried in from the edited record applies, and with none of
    /// that either, the fixed fallback glyph.
    pub fn resolved_avatar(&self) -> Avatar {
        let raw = match &self.selection {
            Some(AvatarSelection::Emoji(glyph)) => glyph.as_str(),
            Some(AvatarSelection::Preset(url)) => url.as_str(),
            Some(AvatarSelection::CustomUrl(text)) if text.trim().starts_with("http") => {
                text.as_str()
            }
            _ => self.initial_avatar.as_raw(),
        };

        match Avatar::classify(raw) {
            Avatar::Default => Avatar::Glyph(Avatar::FALLBACK_GLYPH.to_string()),
            avatar => avatar,
        }
    }

    fn fields_are_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Drive one submission through the phase machine:
    /// `Idle -> Validating -> {invalid: Idle + modal} | {valid: Persisting -> Idle}`
    pub async fn submit(&mut self, store: &dyn UserStore) -> SubmitOutcome {
        self.phase = FormPhase::Validating;
        if !self.fields_are_valid() {
            self.phase = FormPhase::Idle;
            return SubmitOutcome::Rejected {
                modal: validation_modal(),
            };
        }

        self.phase = FormPhase::Persisting;
        match self.persist(store).await {
            Ok(user) => {
                self.clear();
                self.phase = FormPhase::Idle;
                SubmitOutcome::Saved { user }
            }
            Err(e) => {
                tracing::error!("failed to save user: {e}");
                self.phase = FormPhase::Idle;
                SubmitOutcome::Rejected {
                    modal: save_error_modal(),
                }
            }
        }
    }

    async fn persist(&self, store: &dyn UserStore) -> agenda_core::Result<FrontendUser> {
        let mut users = store.load_all().await?;

        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let avatar = self.resolved_avatar();

        let record = match &self.editing {
            // Edit path: replace the matching record, preserving its id;
            // an unmatched id rewrites the collection unchanged.
            Some(target) => {
                let record = UserRecord {
                    id: target.clone(),
                    name,
                    email,
                    avatar,
                };
                for user in &mut users {
                    if user.id == record.id {
                        *user = record.clone();
                    }
                }
                record
            }
            // Create path: append with a freshly generated id.
            None => {
                let record = UserRecord {
                    id: UserId::generate(),
                    name,
                    email,
                    avatar,
                };
                users.push(record.clone());
                record
            }
        };

        store.save_all(&users).await?;
        Ok(FrontendUser::from(record))
    }

    /// Reset the fields after a successful save
    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.initial_avatar = Avatar::Default;
        self.selection = None;
    }
}

/// Payload of the save command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserInput {
    /// Edit-target id, present on the edit path
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    /// Final avatar selection; absent when nothing was chosen
    #[serde(default)]
    pub avatar: Option<AvatarSelection>,
    /// Route-parameter style editing flag ("true" when editing)
    #[serde(default)]
    pub is_editing: Option<String>,
    /// Avatar carried in from the edited record's route parameters
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl SaveUserInput {
    /// Build the form state this payload describes
    pub fn into_form(self) -> UserForm {
        let editing = matches!(self.is_editing.as_deref(), Some("true"))
            .then_some(self.id)
            .flatten()
            .map(UserId::new);

        UserForm {
            editing,
            name: self.name,
            email: self.email,
            initial_avatar: Avatar::classify(self.avatar_url.as_deref().unwrap_or("")),
            selection: self.avatar,
            phase: FormPhase::Idle,
        }
    }
}

/// The avatar strips shown by the form screen
#[tauri::command]
pub fn avatar_options() -> AvatarOptions {
    AvatarOptions {
        emojis: AVATAR_EMOJIS.iter().map(|s| (*s).to_string()).collect(),
        preset_urls: PRESET_AVATARS.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Save the form: create a new record or update the edited one
#[tauri::command]
pub async fn save_user(
    input: SaveUserInput,
    state: State<'_, AppState>,
) -> Result<SubmitOutcome, String> {
    let mut form = input.into_form();
    Ok(form.submit(state.store.as_ref()).await)
}
