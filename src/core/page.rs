/// Whether init must wait for `DOMContentLoaded`, given `document.readyState`.
pub fn init_deferred(ready_state: &str) -> bool {
    ready_state == "loading"
}
