//! # Sort Redirect Controller
//!
//! Turns a committed selection on the page's sort dropdown into a full page
//! navigation to `<origin>/?sort_method=<value>`. The page server then reads
//! the parameter back and re-renders with that option selected.
//!
//! The controller is written against three small seams so that it runs
//! without a browser:
//!
//! - [`Document`] looks up the dropdown by id once, at attach time
//! - [`SelectControl`] exposes the dropdown's current value
//! - [`Navigator`] performs the top-level navigation
//!
//! In the browser the same contract is wired by the inline script returned
//! from [`browser_adapter_script`], which the rendered page embeds after the
//! control.
//!
//! Every other query parameter of the current page is dropped on a sort
//! change, so a page number or filter does not survive re-sorting.

use std::{fmt, str::FromStr};

use reqwest::Url;

use crate::{
    error::RedirectError,
    sort::{SORT_METHOD_PARAM, SortMethod},
};

pub trait SelectControl {
    /// The value of the currently selected option.
    fn value(&self) -> String;
}

pub trait Document {
    type Control: SelectControl;

    fn control_by_id(&self, id: &str) -> Option<Self::Control>;
}

pub trait Navigator {
    /// Replaces the current page with `destination`.
    fn navigate(&mut self, destination: &str);
}

/// Scheme, host and port of a page, serialized without a trailing slash.
/// Default ports are elided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    pub fn parse(raw: &str) -> Result<Self, RedirectError> {
        let invalid = |reason: String| RedirectError::InvalidOrigin {
            origin: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(invalid(format!("scheme {} has no origin", url.scheme())));
        }

        Ok(Self(origin.ascii_serialization()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Origin {
    type Err = RedirectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Destination for a sort change. The sort method is passed through as is.
pub fn destination_for(origin: &Origin, sort_method: &SortMethod) -> String {
    format!("{origin}/?{SORT_METHOD_PARAM}={sort_method}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Attached and waiting for a committed selection.
    Idle,
    /// A navigation has been issued; the document is being replaced.
    Navigating,
}

pub struct SortRedirectController<C, N> {
    origin: Origin,
    control: C,
    navigator: N,
    state: ControllerState,
}

impl<C: SelectControl, N: Navigator> SortRedirectController<C, N> {
    /// Looks up the control once and binds the controller to it.
    ///
    /// Fails with [`RedirectError::ControlNotFound`] when the document has
    /// no control with `control_id`; nothing is bound in that case.
    pub fn attach<D>(
        document: &D,
        control_id: &str,
        origin: Origin,
        navigator: N,
    ) -> Result<Self, RedirectError>
    where
        D: Document<Control = C>,
    {
        let control =
            document
                .control_by_id(control_id)
                .ok_or_else(|| RedirectError::ControlNotFound {
                    id: control_id.to_string(),
                })?;

        Ok(Self {
            origin,
            control,
            navigator,
            state: ControllerState::Idle,
        })
    }

    /// Handles a `change` event: reads the control's value, issues exactly
    /// one navigation and returns its destination.
    pub fn on_selection_committed(&mut self) -> String {
        let sort_method = SortMethod::from(self.control.value());
        let destination = destination_for(&self.origin, &sort_method);

        self.navigator.navigate(&destination);
        self.state = ControllerState::Navigating;
        destination
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

/// Inline script binding the dropdown's `change` event in the browser.
///
/// Must run after the control is part of the document. The origin and the
/// control are read once; each event navigates with the value at that time.
pub fn browser_adapter_script(control_id: &str) -> String {
    format!(
        r#"(function () {{
  const control = document.getElementById("{control_id}");
  if (control === null) {{
    throw new Error("Sort control #{control_id} not found in document");
  }}
  const origin = window.location.origin;
  control.addEventListener("change", function () {{
    window.location.href = origin + "/?{SORT_METHOD_PARAM}=" + control.value;
  }});
}})();"#
    )
}
