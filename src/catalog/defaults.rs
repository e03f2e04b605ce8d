//! Built-in suggestion lists.
//!
//! The value list is what the field falls back to when no event-derived
//! suggestions are available. Entries are unique and contain no spaces, so a
//! committed value always survives a re-tokenize unchanged.

use once_cell::sync::Lazy;

use crate::{Suggestion, SuggestionType};

pub(crate) static NEGATION: Lazy<Suggestion> =
    Lazy::new(|| Suggestion::new(SuggestionType::Unary, "!").with_description("negation"));

pub(crate) static UNARY: Lazy<Vec<Suggestion>> = Lazy::new(|| vec![NEGATION.clone()]);

pub(crate) static BINARY: Lazy<Vec<Suggestion>> = Lazy::new(|| {
    vec![
        Suggestion::new(SuggestionType::Binary, "&&").with_description("and"),
        Suggestion::new(SuggestionType::Binary, "||").with_description("or"),
    ]
});

/// (selector, description)
const VALUES: &[(&str, &str)] = &[
    ("**", "everywhere"),
    ("password", "attributes named \"password\""),
    ("$string", "all strings"),
    ("$number", "all numbers"),
    ("$boolean", "all booleans"),
    ("$datetime", "all timestamps"),
    ("$array", "all arrays"),
    ("$object", "all objects"),
    ("$event", "the entire event"),
    ("$exception", "a single exception instance"),
    ("$error.value", "the exception value"),
    ("$stacktrace", "a stack trace instance"),
    ("$frame", "a stack trace frame"),
    ("$frame.vars.foo", "the local variable \"foo\""),
    ("$request", "the HTTP request context"),
    ("$http", "an alias for $request"),
    ("$http.headers.x-custom-token", "the X-Custom-Token HTTP header"),
    ("$user", "the user context"),
    ("$user.ip_address", "the user IP address"),
    ("$logentry", "the logentry of an event"),
    ("$message", "the log message"),
    ("$thread", "a thread instance"),
    ("$breadcrumb", "a breadcrumb"),
    ("$span", "a trace span"),
    ("$sdk", "the SDK context"),
    ("extra.MyValue", "the key \"MyValue\" in \"Additional Data\""),
    ("extra.**", "everything in \"Additional Data\""),
    ("contexts.device.timezone", "the timezone in the device context"),
    ("tags.server_name", "the tag \"server_name\""),
    ("$attachments.**", "all attachments"),
    ("$attachments.'my-custom-file.txt'", "all attachments named \"my-custom-file.txt\""),
    ("$minidump", "the entire minidump of a native crash report"),
    ("$minidump.heap_memory", "the heap memory region in a native crash report"),
    ("$minidump.stack_memory", "the stack memory region in a native crash report"),
    ("$minidump.thread_context", "the thread context in a native crash report"),
];

pub(crate) static VALUE: Lazy<Vec<Suggestion>> = Lazy::new(|| {
    VALUES.iter().map(|(value, description)| Suggestion::value(*value).with_description(*description)).collect()
});
