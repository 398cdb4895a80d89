//! Integration tests for the `#[recognizer]` attribute.

use recognizers::{recognizer, Recognized, RecognizerMeta, Registry, RetagPolicy};
use serde_json::json;

#[recognizer("greeting")]
fn detect_hello(input: &str) -> bool {
    input.contains("hello")
}

#[recognizer]
pub fn detect_goodbye(input: &str) -> bool {
    input.contains("bye")
}

#[recognizer(name = "")]
fn detect_question(input: &str) -> bool {
    input.ends_with('?')
}

#[recognizer(name = "shout")]
fn detect_shout<S: AsRef<str>>(input: S) -> bool {
    let text = input.as_ref();
    !text.is_empty() && text.chars().all(|c| !c.is_lowercase())
}

#[recognizer(name = "first_word")]
fn first_word<'a>(input: &'a str) -> &'a str {
    input.split_whitespace().next().unwrap_or("")
}

#[recognizer("loose")]
fn detect_loose(input: impl AsRef<str>) -> bool {
    input.as_ref().contains("hello")
}

#[recognizer]
fn detect_any(inputs: Vec<Option<impl AsRef<str>>>) -> bool {
    inputs.iter().flatten().any(|input| input.as_ref().contains("hello"))
}

#[recognizer(name = "polite")]
#[derive(Debug, Clone, PartialEq)]
pub struct PolitenessRecognizer {
    threshold: u32,
}

impl PolitenessRecognizer {
    fn score(&self, input: &str) -> u32 {
        ["please", "thanks"]
            .iter()
            .filter(|w| input.contains(*w))
            .count() as u32
            * self.threshold
    }
}

#[recognizer]
#[derive(Debug, PartialEq)]
enum Mood {
    Happy,
    Sad,
}

#[recognizer]
struct Wrapper<T: Clone> {
    inner: T,
}

#[recognizer(name = "renamed", crate = "recognizers")]
struct CustomPath;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("recognizers=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_function_given_name() {
    assert_eq!(detect_hello::RECOGNIZER_NAME, "greeting");
    assert_eq!(
        detect_hello::recognizer_meta(),
        RecognizerMeta::from_static("greeting")
    );
}

#[test]
fn test_function_inferred_name() {
    assert_eq!(detect_goodbye::RECOGNIZER_NAME, "detect_goodbye");
    assert_eq!(
        serde_json::to_value(detect_goodbye::recognizer_meta()).unwrap(),
        json!({"name": "detect_goodbye"})
    );
}

#[test]
fn test_empty_name_falls_back_to_identifier() {
    assert_eq!(detect_question::RECOGNIZER_NAME, "detect_question");
}

#[test]
fn test_tagged_functions_still_callable() {
    assert!(detect_hello("hello world"));
    assert!(!detect_hello("goodbye"));
    assert!(detect_goodbye("bye now"));
    assert!(detect_question("really?"));
    assert!(detect_shout("STOP"));
    assert!(!detect_shout(String::from("quiet")));
    assert_eq!(first_word("hello there"), "hello");
}

#[test]
fn test_generic_function_has_name_only() {
    assert_eq!(detect_shout::RECOGNIZER_NAME, "shout");
}

#[test]
fn test_impl_trait_argument_functions() {
    assert_eq!(detect_loose::RECOGNIZER_NAME, "loose");
    assert_eq!(detect_any::RECOGNIZER_NAME, "detect_any");

    assert!(detect_loose("hello"));
    assert!(detect_loose(String::from("say hello")));
    assert!(detect_any(vec![None, Some("hello")]));
    assert!(!detect_any(vec![None::<&str>]));
}

#[test]
fn test_impl_trait_function_tagged_at_runtime() {
    let mut registry = Registry::new();
    // The argument type is inferred from the call below
    let detect = registry.tag(None, detect_loose);

    assert!(detect("hello"));
    assert_eq!(registry.meta(&detect).unwrap().name(), "detect_loose");
}

#[test]
fn test_register_functions() {
    init_tracing();
    let mut registry = Registry::new();
    detect_hello::register(&mut registry);
    detect_goodbye::register(&mut registry);
    first_word::register(&mut registry);

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.meta(&detect_hello).unwrap().name(), "greeting");
    assert_eq!(registry.meta(&detect_goodbye).unwrap().name(), "detect_goodbye");
    assert_eq!(registry.meta(&first_word).unwrap().name(), "first_word");
    assert!(registry.meta(&detect_question).is_none());
}

#[test]
fn test_runtime_retag_overwrites_attribute_name() {
    init_tracing();
    let mut registry = Registry::new();
    registry.set_retag_policy(RetagPolicy::Warn);
    detect_hello::register(&mut registry);
    let detect = recognizers::recognizer(Some("salutation")).apply(&mut registry, detect_hello);

    assert!(detect("hello"));
    assert_eq!(registry.meta(&detect_hello).unwrap().name(), "salutation");
}

#[test]
fn test_struct_name_and_behavior() {
    assert_eq!(PolitenessRecognizer::RECOGNIZER_NAME, "polite");

    let recognizer = PolitenessRecognizer { threshold: 2 };
    assert_eq!(recognizer.score("please and thanks"), 4);
    assert_eq!(recognizer.clone(), recognizer);
}

#[test]
fn test_enum_inferred_name() {
    assert_eq!(Mood::RECOGNIZER_NAME, "Mood");
    assert_ne!(Mood::Happy, Mood::Sad);
}

#[test]
fn test_generic_struct() {
    assert_eq!(<Wrapper<u8>>::RECOGNIZER_NAME, "Wrapper");
    assert_eq!(<Wrapper<String>>::recognizer_meta().name(), "Wrapper");

    let wrapper = Wrapper { inner: 7u8 };
    assert_eq!(wrapper.inner.clone(), 7);
}

#[test]
fn test_custom_crate_path() {
    assert_eq!(CustomPath::RECOGNIZER_NAME, "renamed");
}

#[test]
fn test_register_types_and_snapshot() {
    let mut registry = Registry::new();
    registry.register::<PolitenessRecognizer>();
    registry.register::<Mood>();

    let names: Vec<_> = registry.snapshot().into_iter().map(|e| e.meta.name).collect();
    assert_eq!(names.len(), 2);
    assert_eq!(registry.names(), vec!["Mood", "polite"]);
    assert_eq!(
        registry.find("polite").next().unwrap().type_name,
        std::any::type_name::<PolitenessRecognizer>()
    );
}
