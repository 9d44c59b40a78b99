use std::{cell::RefCell, collections::HashMap, rc::Rc};

use shelfview::{
    error::RedirectError,
    redirect::*,
    sort::{SORT_METHOD_PARAM, SortMethod},
};

/// Dropdown stub; the value is shared so tests can change the selection
/// after the controller is attached.
#[derive(Clone)]
struct StubControl {
    value: Rc<RefCell<String>>,
}

impl StubControl {
    fn new(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(value.to_string())),
        }
    }

    fn select(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }
}

impl SelectControl for StubControl {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

#[derive(Default)]
struct StubDocument {
    controls: HashMap<String, StubControl>,
}

impl StubDocument {
    fn with_control(id: &str, control: &StubControl) -> Self {
        let mut controls = HashMap::new();
        controls.insert(id.to_string(), control.clone());
        Self { controls }
    }
}

impl Document for StubDocument {
    type Control = StubControl;

    fn control_by_id(&self, id: &str) -> Option<StubControl> {
        self.controls.get(id).cloned()
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: &str) {
        self.visited.push(destination.to_string());
    }
}

fn attach(
    origin: &str,
    control: &StubControl,
) -> SortRedirectController<StubControl, RecordingNavigator> {
    let document = StubDocument::with_control(SORT_METHOD_PARAM, control);
    SortRedirectController::attach(
        &document,
        SORT_METHOD_PARAM,
        Origin::parse(origin).expect("valid origin"),
        RecordingNavigator::default(),
    )
    .expect("control present")
}

#[test]
fn test_destination_for_default_port() {
    let control = StubControl::new("title_az");
    let mut controller = attach("https://library.example.org", &control);

    let destination = controller.on_selection_committed();

    assert_eq!(destination, "https://library.example.org/?sort_method=title_az");
    assert_eq!(controller.navigator().visited, vec![destination]);
}

#[test]
fn test_destination_for_explicit_port() {
    let control = StubControl::new("date_desc");
    let mut controller = attach("https://library.example.org:8080", &control);

    assert_eq!(
        controller.on_selection_committed(),
        "https://library.example.org:8080/?sort_method=date_desc"
    );
}

#[test]
fn test_missing_control_fails_attach() {
    let document = StubDocument::default();
    let result: Result<SortRedirectController<StubControl, RecordingNavigator>, _> =
        SortRedirectController::attach(
            &document,
            SORT_METHOD_PARAM,
            Origin::parse("https://library.example.org").expect("valid origin"),
            RecordingNavigator::default(),
        );

    match result {
        Err(err) => assert_eq!(
            err,
            RedirectError::ControlNotFound {
                id: SORT_METHOD_PARAM.to_string()
            }
        ),
        Ok(_) => panic!("attach must fail without a control"),
    }
}

#[test]
fn test_lookup_uses_the_given_id() {
    let control = StubControl::new("title_az");
    let document = StubDocument::with_control("other_select", &control);

    let result = SortRedirectController::attach(
        &document,
        SORT_METHOD_PARAM,
        Origin::parse("https://library.example.org").expect("valid origin"),
        RecordingNavigator::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_same_value_gives_same_destination() {
    let control = StubControl::new("ascending_publish_date");
    let mut controller = attach("https://library.example.org", &control);

    let first = controller.on_selection_committed();
    let second = controller.on_selection_committed();
    let third = controller.on_selection_committed();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(controller.navigator().visited.len(), 3);
}

#[test]
fn test_one_navigation_per_event_and_last_wins() {
    let control = StubControl::new("ascending_alphabetical");
    let mut controller = attach("https://library.example.org", &control);

    control.select("title_az");
    controller.on_selection_committed();
    control.select("date_desc");
    controller.on_selection_committed();

    assert_eq!(
        controller.navigator().visited,
        vec![
            "https://library.example.org/?sort_method=title_az",
            "https://library.example.org/?sort_method=date_desc",
        ]
    );
}

#[test]
fn test_no_navigation_without_event() {
    let control = StubControl::new("title_az");
    let controller = attach("https://library.example.org", &control);

    control.select("date_desc");

    assert!(controller.navigator().visited.is_empty());
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn test_state_moves_to_navigating() {
    let control = StubControl::new("title_az");
    let mut controller = attach("https://library.example.org", &control);
    assert_eq!(controller.state(), ControllerState::Idle);

    controller.on_selection_committed();
    assert_eq!(controller.state(), ControllerState::Navigating);
}

#[test]
fn test_other_query_parameters_are_dropped() {
    // Page loaded as /?sort_method=title&page=2; only the origin is kept.
    let control = StubControl::new("title");
    let mut controller = attach("https://library.example.org/?sort_method=title&page=2", &control);

    control.select("author");
    let destination = controller.on_selection_committed();

    assert_eq!(destination, "https://library.example.org/?sort_method=author");
    assert!(!destination.contains("page="));
}

#[test]
fn test_value_is_passed_through_unchanged() {
    let origin = Origin::parse("http://localhost:5000").expect("valid origin");
    assert_eq!(
        destination_for(&origin, &SortMethod::from("Title Desc")),
        "http://localhost:5000/?sort_method=Title Desc"
    );
    assert_eq!(
        destination_for(&origin, &SortMethod::from("")),
        "http://localhost:5000/?sort_method="
    );
}

#[test]
fn test_origin_parsing() {
    assert_eq!(
        Origin::parse("https://library.example.org").expect("origin").as_str(),
        "https://library.example.org"
    );
    assert_eq!(
        Origin::parse("https://library.example.org:443/some/path").expect("origin").as_str(),
        "https://library.example.org"
    );
    assert_eq!(
        "http://127.0.0.1:5000/".parse::<Origin>().expect("origin").to_string(),
        "http://127.0.0.1:5000"
    );
}

#[test]
fn test_origin_rejects_non_origins() {
    assert!(matches!(
        Origin::parse("not a url"),
        Err(RedirectError::InvalidOrigin { .. })
    ));
    assert!(matches!(
        Origin::parse("data:text/plain,hello"),
        Err(RedirectError::InvalidOrigin { .. })
    ));
}

#[test]
fn test_browser_adapter_script() {
    let script = browser_adapter_script(SORT_METHOD_PARAM);

    assert!(script.contains(r#"document.getElementById("sort_method")"#));
    assert!(script.contains("throw new Error"));
    assert!(script.contains(r#"addEventListener("change""#));
    assert!(script.contains(r#"origin + "/?sort_method=" + control.value"#));
    assert!(script.contains("window.location.href ="));
}
