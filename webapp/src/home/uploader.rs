use std::sync::Arc;

use dioxus::{html::FileEngine, prelude::*};
use tracing::{debug, error};

use api::{ApiError, ImageApi, UploadFile};
use common::{
    StatusMessage,
    config::AppConfig,
    upload::{FlowError, UploadFlow},
};

// reads the picked file out of the browser, along with the mime type the
// browser guessed for it
async fn read_selection(engine: Arc<dyn FileEngine>, name: String) -> Result<UploadFile, ApiError> {
    let bytes = engine.read_file(&name).await.ok_or_else(|| {
        error!({ filename = %name }, "failed to read selected file");
        ApiError::Transport(format!("could not read {name}"))
    })?;

    let content_type = engine
        .get_native_file(&name)
        .await
        .and_then(|native| native.downcast::<web_sys::File>().ok())
        .map(|file| file.type_());

    debug!({ filename = %name, bytes = bytes.len(), content_type = ?content_type }, "read selected file");

    let mut file = UploadFile::new(name, bytes);
    file.content_type = content_type;
    Ok(file)
}

#[derive(Clone, PartialEq, Props)]
pub struct UploaderProps {
    flow: Signal<UploadFlow>,
    status: Signal<Option<StatusMessage>>,
}

#[component]
pub fn Uploader(props: UploaderProps) -> Element {
    let mut flow = props.flow;
    let mut status = props.status;
    let config = use_context::<AppConfig>();

    let busy = flow.read().is_busy();
    let generation = flow.read().picker_generation();

    let on_change = move |event: FormEvent| {
        let api = config.image_api();
        async move {
            let selection = event.files().and_then(|engine| {
                let name = engine.files().into_iter().next()?;
                Some((engine, name))
            });

            let begin = flow.write().begin(selection.as_ref().map(|(_, name)| name.as_str()));
            match begin {
                Ok(message) => status.set(Some(message)),
                Err(FlowError::Busy) => return,
                Err(err) => {
                    status.set(Some(StatusMessage::error(err.to_string())));
                    return;
                }
            }

            let outcome = match selection {
                Some((engine, name)) => match read_selection(engine, name).await {
                    Ok(file) => api.upload(&file).await,
                    Err(err) => Err(err),
                },
                None => Err(ApiError::Transport(String::from("no file selected"))),
            };

            // finish() must land before the picker comes back
            let message = flow.write().finish(outcome);
            status.set(Some(message));
        }
    };

    rsx! {
        div { class: "uploader",
            label { class: if busy { "upload-label busy" } else { "upload-label" },
                if busy {
                    div { class: "upload-dropzone busy", "Uploading..." }
                } else {
                    // a new key per attempt, so the browser forgets the last selection
                    input {
                        key: "{generation}",
                        class: "upload-dropzone",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_change,
                    }
                }
            }
        }
    }
}
