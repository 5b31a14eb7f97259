use std::path::Path;

use dioxus::prelude::*;

use advisor_core::CareerGoal;
use services::{ProfileSubmission, ProfileUpload};

use crate::context::AppContext;
use crate::views::ViewError;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const SAMPLE_PROFILE: &str = "Junior developer with two years of experience building internal \
tools in Python and JavaScript. Comfortable with Git, SQL, and basic Linux administration. \
Built a small Flask dashboard for team metrics and contributed REST endpoints to a Django \
service. Looking to deepen backend and data skills.";

/// Profile collection stage: paste, sample, or upload a CV, pick a
/// career goal, and submit.
///
/// Uploads go to the backend unparsed; the parsed text comes back into
/// the textarea for review, then travels through the same submit path as
/// pasted text.
#[component]
pub fn ProfileStage(on_complete: EventHandler<ProfileSubmission>) -> Element {
    let ctx = use_context::<AppContext>();
    let profiles = ctx.profile_service();

    let mut profile_text = use_signal(String::new);
    let mut career = use_signal(CareerGoal::default);
    let mut file_path = use_signal(String::new);
    let error = use_signal(|| None::<ViewError>);
    let loading = use_signal(|| false);

    let submit = {
        let profiles = profiles.clone();
        use_callback(move |()| {
            let profiles = profiles.clone();
            let mut error = error;
            let mut loading = loading;
            spawn(async move {
                loading.set(true);
                let result = profiles.submit(&profile_text(), career()).await;
                loading.set(false);
                match result {
                    Ok(submission) => {
                        error.set(None);
                        on_complete.call(submission);
                    }
                    Err(err) => error.set(Some(ViewError::from_profile_error(&err))),
                }
            });
        })
    };

    let upload = {
        let profiles = profiles.clone();
        use_callback(move |()| {
            let profiles = profiles.clone();
            let mut profile_text = profile_text;
            let mut error = error;
            let mut loading = loading;
            spawn(async move {
                let path = file_path();
                // Async read keeps large CVs from stalling the UI task.
                let Ok(bytes) = tokio::fs::read(&path).await else {
                    error.set(Some(ViewError::FileUnreadable));
                    return;
                };
                let file_name = Path::new(&path)
                    .file_name()
                    .map_or_else(|| path.clone(), |name| name.to_string_lossy().into_owned());

                loading.set(true);
                let result = profiles
                    .upload_for_review(ProfileUpload { file_name, bytes }, career())
                    .await;
                loading.set(false);
                match result {
                    Ok(analysis) => {
                        error.set(None);
                        profile_text.set(analysis.raw_text);
                    }
                    Err(err) => error.set(Some(ViewError::from_backend_error(&err))),
                }
            });
        })
    };

    #[cfg(test)]
    {
        let upload_with_path = use_callback(move |path: String| {
            let mut file_path = file_path;
            file_path.set(path);
            upload.call(());
        });
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ProfileTestHandles>() {
                handles.register(upload_with_path);
            }
        }
    }

    let is_loading = loading();
    let has_file_path = !file_path().trim().is_empty();
    let error_message = error.read().as_ref().map(ViewError::message);

    rsx! {
        section { class: "stage profile-stage",
            h2 { "Tell us about yourself" }

            label { class: "profile-stage__label", r#for: "career-select", "Career goal" }
            select {
                id: "career-select",
                disabled: is_loading,
                onchange: move |evt| {
                    if let Ok(goal) = evt.value().parse() {
                        career.set(goal);
                    }
                },
                for goal in CareerGoal::ALL {
                    option {
                        value: "{goal}",
                        selected: goal == career(),
                        "{goal}"
                    }
                }
            }

            label { class: "profile-stage__label", r#for: "profile-text", "Your profile" }
            textarea {
                id: "profile-text",
                class: "profile-stage__text",
                rows: "10",
                placeholder: "Paste your CV or describe your experience...",
                value: "{profile_text}",
                disabled: is_loading,
                oninput: move |evt| profile_text.set(evt.value()),
            }

            div { class: "profile-stage__upload",
                input {
                    id: "profile-file",
                    r#type: "text",
                    placeholder: "Path to a PDF, DOCX or TXT file",
                    value: "{file_path}",
                    disabled: is_loading,
                    oninput: move |evt| file_path.set(evt.value()),
                }
                button {
                    class: "btn btn-secondary",
                    id: "profile-upload",
                    r#type: "button",
                    disabled: is_loading || !has_file_path,
                    onclick: move |_| upload.call(()),
                    if is_loading { "Uploading..." } else { "Upload & Scan" }
                }
            }

            if let Some(message) = error_message {
                p { class: "stage-error", "{message}" }
            }

            div { class: "profile-stage__actions",
                button {
                    class: "btn btn-ghost",
                    id: "profile-sample",
                    r#type: "button",
                    disabled: is_loading,
                    onclick: move |_| profile_text.set(SAMPLE_PROFILE.to_string()),
                    "Use sample profile"
                }
                button {
                    class: "btn btn-primary",
                    id: "profile-submit",
                    r#type: "button",
                    disabled: is_loading,
                    onclick: move |_| submit.call(()),
                    if is_loading { "Analyzing..." } else { "Continue →" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ProfileTestHandles {
    upload: Rc<RefCell<Option<Callback<String>>>>,
}

#[cfg(test)]
impl ProfileTestHandles {
    pub(crate) fn register(&self, upload: Callback<String>) {
        *self.upload.borrow_mut() = Some(upload);
    }

    /// Sets the file-path field and runs the upload handler.
    pub(crate) fn upload(&self) -> Callback<String> {
        (*self.upload.borrow()).expect("profile upload registered")
    }
}
