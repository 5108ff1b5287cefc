use std::pin::pin;

use async_trait::async_trait;
use futures::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use wasm_bindgen::JsValue;
use web_sys::{AbortController, Blob, BlobPropertyBag, FormData};

use crate::{ApiError, ApiStatus, UploadFile, UploadResult, endpoint_url};

// the remote image analysis service
//
// the views only ever talk to this trait so that the upload and probe flows
// can be driven by an in-memory fake in tests.  the futures are not Send
// because the browser implementation holds JsValues across awaits
#[async_trait(?Send)]
pub trait ImageApi {
    async fn status(&self) -> Result<ApiStatus, ApiError>;

    async fn upload(&self, file: &UploadFile) -> Result<UploadResult, ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpImageApi {
    base_url: String,
    upload_timeout_ms: u32,
}

impl HttpImageApi {
    pub fn new(base_url: impl Into<String>, upload_timeout_ms: u32) -> Self {
        HttpImageApi {
            base_url: base_url.into(),
            upload_timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl ImageApi for HttpImageApi {
    async fn status(&self) -> Result<ApiStatus, ApiError> {
        let url = endpoint_url(&self.base_url, "/");
        debug!({ url = %url }, "probing api");

        let resp = Request::get(&url).send().await?;

        read_json(resp).await
    }

    async fn upload(&self, file: &UploadFile) -> Result<UploadResult, ApiError> {
        let url = endpoint_url(&self.base_url, "/upload");
        debug!({ url = %url, filename = %file.name, bytes = file.bytes.len() }, "sending upload");

        let controller = AbortController::new().map_err(js_error)?;

        let request = Request::post(&url)
            .abort_signal(Some(&controller.signal()))
            .body(form_data(file)?)?;

        let send = async move {
            let resp = request.send().await?;
            debug!({ status = resp.status() }, "upload response");
            read_json(resp).await
        };

        race_timeout(
            send,
            TimeoutFuture::new(self.upload_timeout_ms),
            self.upload_timeout_ms,
            || controller.abort(),
        )
        .await
    }
}

// whichever finishes first wins; on_timeout runs only when the timer does
async fn race_timeout<T>(
    request: impl Future<Output = Result<T, ApiError>>,
    timer: impl Future<Output = ()>,
    timeout_ms: u32,
    on_timeout: impl FnOnce(),
) -> Result<T, ApiError> {
    match select(pin!(request), pin!(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            error!({ timeout_ms = timeout_ms }, "request timed out, aborting");
            on_timeout();
            Err(ApiError::Timeout(timeout_ms))
        }
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let body = if resp.ok() {
        String::new()
    } else {
        resp.text().await.unwrap_or_default()
    };
    check_status(resp.ok(), resp.status(), body)?;

    Ok(resp.json().await?)
}

// a non-2xx response is surfaced with its body untouched
fn check_status(ok: bool, status: u16, body: String) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Rejected { status, body })
    }
}

// the multipart body has a single part named "file", matching the
// server's UploadFile parameter
fn form_data(file: &UploadFile) -> Result<FormData, ApiError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));

    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type());

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(js_error)?;

    Ok(form)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::{
        executor::block_on,
        future::{pending, ready},
    };

    use super::*;

    #[test]
    fn stalled_request_times_out_and_aborts() {
        let aborted = Cell::new(0);

        let result: Result<UploadResult, ApiError> = block_on(race_timeout(
            pending(),
            ready(()),
            250,
            || aborted.set(aborted.get() + 1),
        ));

        assert_eq!(result, Err(ApiError::Timeout(250)));
        assert_eq!(result.unwrap_err().to_string(), "request timed out after 250 ms");
        assert_eq!(aborted.get(), 1);
    }

    #[test]
    fn response_beats_the_timer() {
        let aborted = Cell::new(0);
        let status = ApiStatus {
            message: String::from("ok"),
            ai_model_loaded: Some(true),
        };

        let result = block_on(race_timeout(
            ready(Ok(status.clone())),
            pending(),
            250,
            || aborted.set(aborted.get() + 1),
        ));

        assert_eq!(result, Ok(status));
        assert_eq!(aborted.get(), 0);
    }

    #[test]
    fn failed_request_is_not_a_timeout() {
        let result: Result<ApiStatus, ApiError> = block_on(race_timeout(
            ready(Err(ApiError::Transport(String::from("connection refused")))),
            pending(),
            250,
            || panic!("abort must not run"),
        ));

        assert_eq!(result, Err(ApiError::Transport(String::from("connection refused"))));
    }

    #[test]
    fn non_2xx_keeps_status_and_body() {
        let err = check_status(false, 413, String::from(r#"{"detail": "File too large"}"#)).unwrap_err();

        assert_eq!(
            err,
            ApiError::Rejected {
                status: 413,
                body: String::from(r#"{"detail": "File too large"}"#),
            }
        );
        assert_eq!(err.to_string(), r#"413 - {"detail": "File too large"}"#);
    }

    #[test]
    fn empty_rejection_body_is_kept_empty() {
        assert_eq!(
            check_status(false, 500, String::new()),
            Err(ApiError::Rejected {
                status: 500,
                body: String::new(),
            })
        );
        assert_eq!(check_status(true, 200, String::new()), Ok(()));
    }
}
