use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

/// A template name with the data it is rendered from.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub template: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub data: T,
}

/// What a handler asks the presentation layer to do.
#[derive(Debug)]
pub enum Outcome<T> {
    Render(Page<T>),
    Redirect(String),
}

impl<T> Outcome<T> {
    pub fn render(template: &'static str, title: &'static str, data: T) -> Self {
        Self::Render(Page {
            template,
            title,
            data,
        })
    }

    pub fn redirect(url: impl Into<String>) -> Self {
        Self::Redirect(url.into())
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Render(page) => Json(page).into_response(),
            Outcome::Redirect(url) => Redirect::to(&url).into_response(),
        }
    }
}
