use axum::{
    Form, async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use serde::Deserialize;
use std::convert::Infallible;
use tracing::warn;

pub const MESSAGE_FIELD: &str = "message";

#[derive(Debug, Default, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

/// The `message` field of a chat form post, accepted either url-encoded or as
/// `multipart/form-data`. Absent or unreadable input becomes an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundMessage(pub String);

#[async_trait]
impl<S> FromRequest<S> for InboundMessage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        let message = if is_multipart {
            read_multipart(req, state).await
        } else {
            read_urlencoded(req, state).await
        };

        Ok(Self(message.unwrap_or_default()))
    }
}

async fn read_urlencoded<S>(req: Request, state: &S) -> Option<String>
where
    S: Send + Sync,
{
    match Form::<ChatForm>::from_request(req, state).await {
        Ok(Form(form)) => Some(form.message),
        Err(e) => {
            warn!("Could not read url-encoded chat form: {}", e);
            None
        }
    }
}

async fn read_multipart<S>(req: Request, state: &S) -> Option<String>
where
    S: Send + Sync,
{
    let mut multipart = match Multipart::from_request(req, state).await {
        Ok(multipart) => multipart,
        Err(e) => {
            warn!("Could not read multipart chat form: {}", e);
            return None;
        }
    };

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(MESSAGE_FIELD) => {
                return field.text().await.ok();
            }
            Ok(Some(_)) => continue,
            Ok(None) => return None,
            Err(e) => {
                warn!("Malformed multipart chat form: {}", e);
                return None;
            }
        }
    }
}
