//! # Request Dispatcher
//!
//! Owns the HTTP client and the four handlers. Each handler performs one
//! request and reports exactly one `Action::Completed` on the channel it was
//! given:
//!
//! ```text
//! FetchPost   GET  /posts/{fetch_post_id}   promise-style  (api::fetch)
//! XhrPost     GET  /posts/{xhr_post_id}     callback-style (api::xhr)
//! CreatePost  POST /posts                   promise-style
//! UpdatePost  PUT  /posts/{id}              callback-style
//! ```
//!
//! Handlers never panic on I/O and never retry; every failure becomes an
//! [`ActionError`] for the presenter.

use log::{info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use std::sync::mpsc::{self, Sender};
use tokio::task::JoinHandle;

use crate::api::fetch::fetch_json;
use crate::api::{ActionError, Post, PostDraft, StatusMessages, XhrRequest, XhrResponse};
use crate::core::action::Action;
use crate::core::config::ResolvedConfig;

const FETCH_MESSAGES: StatusMessages = StatusMessages {
    server: "Server error.",
    client: "Client error.",
    transport: "Unexpected error occurred.",
};

const XHR_GET_MESSAGES: StatusMessages = StatusMessages {
    server: "Failed to fetch data.",
    client: "Failed to fetch data.",
    transport: "XHR request failed due to network error.",
};

const CREATE_MESSAGES: StatusMessages = StatusMessages {
    server: "Server issue.",
    client: "Invalid input.",
    transport: "POST failed unexpectedly.",
};

const UPDATE_MESSAGES: StatusMessages = StatusMessages {
    server: "Failed to update post.",
    client: "Failed to update post.",
    transport: "PUT request failed due to network error.",
};

/// Status the callback transport treats as success.
const XHR_SUCCESS_STATUS: u16 = 200;

const PUT_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerId {
    FetchPost,
    XhrPost,
    CreatePost,
    UpdatePost,
}

impl HandlerId {
    pub const ALL: [HandlerId; 4] = [
        HandlerId::FetchPost,
        HandlerId::XhrPost,
        HandlerId::CreatePost,
        HandlerId::UpdatePost,
    ];

    pub fn index(self) -> usize {
        match self {
            HandlerId::FetchPost => 0,
            HandlerId::XhrPost => 1,
            HandlerId::CreatePost => 2,
            HandlerId::UpdatePost => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandlerId::FetchPost => "Fetch post",
            HandlerId::XhrPost => "XHR post",
            HandlerId::CreatePost => "Create post",
            HandlerId::UpdatePost => "Update post",
        }
    }
}

/// A triggered handler together with the input read at trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchPost,
    XhrPost,
    CreatePost(PostDraft),
    UpdatePost { id: String, draft: PostDraft },
}

impl Request {
    pub fn handler(&self) -> HandlerId {
        match self {
            Request::FetchPost => HandlerId::FetchPost,
            Request::XhrPost => HandlerId::XhrPost,
            Request::CreatePost(_) => HandlerId::CreatePost,
            Request::UpdatePost { .. } => HandlerId::UpdatePost,
        }
    }
}

#[derive(Clone)]
pub struct RequestDispatcher {
    client: Client,
    base_url: Url,
    fetch_post_id: u64,
    xhr_post_id: u64,
}

impl RequestDispatcher {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            fetch_post_id: config.fetch_post_id,
            xhr_post_id: config.xhr_post_id,
        }
    }

    /// Starts the handler for `request`. The completion arrives on `tx`.
    ///
    /// Must be called from within a tokio runtime. The returned handle
    /// finishes once the completion has been sent.
    pub fn dispatch(&self, request: Request, tx: Sender<Action>) -> JoinHandle<()> {
        info!("Dispatching {:?}", request.handler());
        match request {
            Request::FetchPost => {
                let this = self.clone();
                tokio::spawn(async move {
                    let result = this.fetch_post().await;
                    complete(&tx, HandlerId::FetchPost, result);
                })
            }
            Request::XhrPost => self.xhr_post(tx),
            Request::CreatePost(draft) => {
                let this = self.clone();
                tokio::spawn(async move {
                    let result = this.create_post(&draft).await;
                    complete(&tx, HandlerId::CreatePost, result);
                })
            }
            Request::UpdatePost { id, draft } => self.update_post(&id, &draft, tx),
        }
    }

    /// Runs one handler to completion and returns its `Completed` action.
    pub async fn perform(&self, request: Request) -> Action {
        let handler = request.handler();
        let (tx, rx) = mpsc::channel();
        if let Err(e) = self.dispatch(request, tx).await {
            warn!("{handler:?} task ended abnormally: {e}");
        }
        rx.try_recv().unwrap_or_else(|_| Action::Completed {
            handler,
            result: Err(ActionError::generic("Request ended without a result.")),
        })
    }

    /// GET the fixed fetch post, promise-style.
    pub async fn fetch_post(&self) -> Result<Post, ActionError> {
        let url = self.posts_url(Some(&self.fetch_post_id.to_string()));
        fetch_json(self.client.get(url), &FETCH_MESSAGES).await
    }

    /// GET the fixed XHR post, callback-style.
    pub fn xhr_post(&self, tx: Sender<Action>) -> JoinHandle<()> {
        let url = self.posts_url(Some(&self.xhr_post_id.to_string()));
        let load_tx = tx.clone();
        XhrRequest::open(&self.client, Method::GET, url)
            .on_load(move |response| {
                let result = interpret_load(response, &XHR_GET_MESSAGES);
                complete(&load_tx, HandlerId::XhrPost, result);
            })
            .on_error(move |_| {
                let result = Err(ActionError::network(XHR_GET_MESSAGES.transport));
                complete(&tx, HandlerId::XhrPost, result);
            })
            .send(None)
    }

    /// POST a new post, promise-style.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ActionError> {
        let url = self.posts_url(None);
        fetch_json(self.client.post(url).json(draft), &CREATE_MESSAGES).await
    }

    /// PUT an update to post `id`, callback-style.
    pub fn update_post(&self, id: &str, draft: &PostDraft, tx: Sender<Action>) -> JoinHandle<()> {
        let body = match serde_json::to_string(draft) {
            Ok(body) => body,
            Err(e) => {
                warn!("Could not encode update body: {e}");
                complete(
                    &tx,
                    HandlerId::UpdatePost,
                    Err(ActionError::generic("Could not encode the update.")),
                );
                return tokio::spawn(async {});
            }
        };

        let url = self.posts_url(Some(id));
        let load_tx = tx.clone();
        XhrRequest::open(&self.client, Method::PUT, url)
            .set_request_header(CONTENT_TYPE, PUT_CONTENT_TYPE)
            .on_load(move |response| {
                let result = interpret_load(response, &UPDATE_MESSAGES);
                complete(&load_tx, HandlerId::UpdatePost, result);
            })
            .on_error(move |_| {
                let result = Err(ActionError::network(UPDATE_MESSAGES.transport));
                complete(&tx, HandlerId::UpdatePost, result);
            })
            .send(Some(body))
    }

    /// `{base}/posts` or `{base}/posts/{id}`, with `id` encoded as one segment.
    fn posts_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("posts");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }
}

/// Interprets a loaded callback-style response: only status 200 is success.
fn interpret_load(response: XhrResponse, messages: &StatusMessages) -> Result<Post, ActionError> {
    if response.status != XHR_SUCCESS_STATUS {
        return Err(ActionError::from_status(response.status, messages));
    }
    serde_json::from_str(&response.response_text).map_err(|e| {
        warn!("Unreadable {} response body: {e}", response.status);
        ActionError::generic(format!("Error {}: Unreadable response body.", response.status))
    })
}

fn complete(tx: &Sender<Action>, handler: HandlerId, result: Result<Post, ActionError>) {
    match &result {
        Ok(post) => info!("{handler:?} succeeded (post id {})", post.id),
        Err(e) => warn!("{handler:?} failed: {e}"),
    }
    if tx.send(Action::Completed { handler, result }).is_err() {
        warn!("Failed to deliver {handler:?} completion: receiver dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;
    use crate::test_support::test_config;

    fn dispatcher(base: &str) -> RequestDispatcher {
        RequestDispatcher::new(&test_config(base))
    }

    #[test]
    fn test_posts_url_for_root_base() {
        let d = dispatcher("https://jsonplaceholder.typicode.com");
        assert_eq!(
            d.posts_url(Some("1")).as_str(),
            "https://jsonplaceholder.typicode.com/posts/1"
        );
        assert_eq!(d.posts_url(None).as_str(), "https://jsonplaceholder.typicode.com/posts");
    }

    #[test]
    fn test_posts_url_keeps_base_path() {
        let d = dispatcher("http://localhost:3000/api/");
        assert_eq!(d.posts_url(Some("9")).as_str(), "http://localhost:3000/api/posts/9");
    }

    #[test]
    fn test_posts_url_encodes_user_supplied_id() {
        let d = dispatcher("http://localhost:3000");
        assert_eq!(
            d.posts_url(Some("1/../../admin?x=1")).as_str(),
            "http://localhost:3000/posts/1%2F..%2F..%2Fadmin%3Fx=1"
        );
    }

    #[test]
    fn test_request_handler_mapping() {
        assert_eq!(Request::FetchPost.handler(), HandlerId::FetchPost);
        assert_eq!(Request::XhrPost.handler(), HandlerId::XhrPost);
        assert_eq!(
            Request::CreatePost(PostDraft::default()).handler(),
            HandlerId::CreatePost
        );
        assert_eq!(
            Request::UpdatePost {
                id: "1".to_string(),
                draft: PostDraft::default()
            }
            .handler(),
            HandlerId::UpdatePost
        );
    }

    #[test]
    fn test_handler_indices_are_distinct() {
        for (position, handler) in HandlerId::ALL.iter().enumerate() {
            assert_eq!(handler.index(), position);
        }
    }

    #[test]
    fn test_interpret_load_requires_exactly_200() {
        let response = XhrResponse {
            status: 201,
            response_text: r#"{"id":1,"title":"A","body":"B"}"#.to_string(),
        };
        let err = interpret_load(response, &XHR_GET_MESSAGES).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Client);
        assert_eq!(err.message, "Error 201: Failed to fetch data.");
    }

    #[test]
    fn test_interpret_load_classifies_by_threshold() {
        let response = XhrResponse {
            status: 502,
            response_text: String::new(),
        };
        let err = interpret_load(response, &UPDATE_MESSAGES).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, "Error 502: Failed to update post.");
    }

    #[test]
    fn test_interpret_load_unreadable_body_is_generic() {
        let response = XhrResponse {
            status: 200,
            response_text: "<html>".to_string(),
        };
        let err = interpret_load(response, &XHR_GET_MESSAGES).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Generic);
        assert_eq!(err.message, "Error 200: Unreadable response body.");
    }

    #[test]
    fn test_interpret_load_success() {
        let response = XhrResponse {
            status: 200,
            response_text: r#"{"id":2,"title":"T","body":"B"}"#.to_string(),
        };
        let post = interpret_load(response, &XHR_GET_MESSAGES).unwrap();
        assert_eq!(post.id, 2);
        assert_eq!(post.title, "T");
    }
}
