//! Admin review table and its create/edit modal.
//!
//! The panel never patches its list locally: every successful mutation is
//! followed by a full [`PanelCommand::Refresh`].
use crate::backend::ReviewStore;
use crate::error::{MutationKind, ReviewError};
use crate::models::review::{Rating, Review, ReviewDraft};
use leptos::logging::{error, log};
use thiserror::Error;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this review?";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("client name is required")]
    MissingName,
    #[error("review text is required")]
    MissingText,
    #[error("no review form is open")]
    Closed,
}

/// Field values of the modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub client_name: String,
    pub review_text: String,
    pub rating: Rating,
}

impl ReviewForm {
    pub fn from_review(review: &Review) -> Self {
        Self {
            client_name: review.client_name.clone(),
            review_text: review.review_text.clone(),
            // Out-of-range stored values fall back to the default choice.
            rating: Rating::new(review.rating).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ReviewDraft, FormError> {
        if self.client_name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.review_text.trim().is_empty() {
            return Err(FormError::MissingText);
        }
        Ok(ReviewDraft {
            client_name: self.client_name.clone(),
            review_text: self.review_text.clone(),
            rating: self.rating.value(),
        })
    }
}

/// The open modal: which review is being edited, if any, and its form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEditor {
    pub editing: Option<String>,
    pub form: ReviewForm,
}

impl ReviewEditor {
    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Review"
        } else {
            "Add New Review"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update"
        } else {
            "Create"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    Refresh,
    Insert(ReviewDraft),
    Update { id: String, draft: ReviewDraft },
    Delete { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    Listed(Vec<Review>),
    Saved,
    Deleted,
    Failed(ReviewError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPanel {
    pub reviews: Vec<Review>,
    pub modal: Option<ReviewEditor>,
}

impl ReviewPanel {
    pub fn open_create(&mut self) {
        self.modal = Some(ReviewEditor {
            editing: None,
            form: ReviewForm::default(),
        });
    }

    pub fn open_edit(&mut self, review: &Review) {
        self.modal = Some(ReviewEditor {
            editing: Some(review.id.clone()),
            form: ReviewForm::from_review(review),
        });
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn form_mut(&mut self) -> Option<&mut ReviewForm> {
        self.modal.as_mut().map(|m| &mut m.form)
    }

    /// The store call for the open form.
    pub fn submit(&self) -> Result<PanelCommand, FormError> {
        let editor = self.modal.as_ref().ok_or(FormError::Closed)?;
        let draft = editor.form.validate()?;
        Ok(match &editor.editing {
            Some(id) => PanelCommand::Update {
                id: id.clone(),
                draft,
            },
            None => PanelCommand::Insert(draft),
        })
    }

    /// Deletes only go out once the admin confirmed.
    pub fn request_delete(&self, id: &str, confirmed: bool) -> Option<PanelCommand> {
        confirmed.then(|| PanelCommand::Delete { id: id.to_string() })
    }

    /// Folds a finished command into the panel, returning any follow-up.
    pub fn apply(&mut self, outcome: PanelOutcome) -> Option<PanelCommand> {
        match outcome {
            PanelOutcome::Listed(reviews) => {
                self.reviews = reviews;
                None
            }
            PanelOutcome::Saved => {
                self.modal = None;
                Some(PanelCommand::Refresh)
            }
            PanelOutcome::Deleted => Some(PanelCommand::Refresh),
            PanelOutcome::Failed(err) => {
                error!("[PANEL] {}", err);
                None
            }
        }
    }
}

pub async fn run(store: &dyn ReviewStore, command: PanelCommand) -> PanelOutcome {
    match command {
        PanelCommand::Refresh => match store.list().await {
            Ok(reviews) => PanelOutcome::Listed(reviews),
            Err(err) => PanelOutcome::Failed(ReviewError::Fetch(err)),
        },
        PanelCommand::Insert(draft) => match store.insert(draft).await {
            Ok(review) => {
                log!("[PANEL] Created review {}", review.id);
                PanelOutcome::Saved
            }
            Err(source) => PanelOutcome::Failed(ReviewError::Mutation {
                kind: MutationKind::Insert,
                source,
            }),
        },
        PanelCommand::Update { id, draft } => match store.update(&id, draft).await {
            Ok(()) => PanelOutcome::Saved,
            Err(source) => PanelOutcome::Failed(ReviewError::Mutation {
                kind: MutationKind::Update,
                source,
            }),
        },
        PanelCommand::Delete { id } => match store.delete(&id).await {
            Ok(()) => PanelOutcome::Deleted,
            Err(source) => PanelOutcome::Failed(ReviewError::Mutation {
                kind: MutationKind::Delete,
                source,
            }),
        },
    }
}

impl ReviewPanel {
    /// Runs `command` and every follow-up it triggers.
    pub async fn dispatch(&mut self, store: &dyn ReviewStore, command: PanelCommand) {
        let mut next = Some(command);
        while let Some(command) = next {
            let outcome = run(store, command).await;
            next = self.apply(outcome);
        }
    }
}
