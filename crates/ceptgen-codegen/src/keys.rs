/// Map a recorded key name onto the identifier CodeceptJS press-key calls
/// expect. The recorder reports printable keys as the character itself and
/// special keys by name; only the named keys below are exportable. A miss is
/// a legitimate outcome and drops the key step from the generated scenario.
pub fn canonical_key(key: &str) -> Option<&'static str> {
    let normalized = key.to_ascii_lowercase();
    let canonical = match normalized.as_str() {
        "backspace" => "BACKSPACE",
        "tab" => "TAB",
        "enter" => "ENTER",
        "escape" => "ESCAPE",
        "space" => "SPACE",
        "pageup" => "PAGEUP",
        "pagedown" => "PAGEDOWN",
        "end" => "END",
        "home" => "HOME",
        "arrowleft" => "ARROWLEFT",
        "arrowup" => "ARROWUP",
        "arrowright" => "ARROWRIGHT",
        "arrowdown" => "ARROWDOWN",
        "delete" => "DELETE",
        _ => return None,
    };
    Some(canonical)
}
