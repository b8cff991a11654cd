use super::focus::FocusHandle;

/// Callbacks owned by the component that hosts the search bar.
///
/// The bar keeps no search state of its own; every user intent is forwarded
/// here verbatim and the parent decides what it means.
pub trait SearchBarHandlers {
    /// The input text changed to `value`.
    fn handle_change(&mut self, value: String);

    /// Enter was pressed. The parent either submits the search or accepts
    /// the highlighted suggestion.
    fn handle_enter_key(&mut self);

    /// The search form was submitted.
    fn handle_submit(&mut self);

    /// The clear affordance was used.
    fn handle_clear(&mut self);

    fn handle_focus(&mut self);

    fn handle_blur(&mut self);

    /// Move the highlighted suggestion by `index_delta`.
    ///
    /// `changed_via_key_press` distinguishes keyboard navigation from pointer
    /// hover so the parent can scroll differently.
    fn update_highlighted_search_hint(&mut self, index_delta: i32, changed_via_key_press: bool);

    /// Receive the bar's focus trigger when it mounts.
    ///
    /// Parents that never focus the bar from elsewhere can ignore the handle.
    fn get_focus(&mut self, focus: FocusHandle) {
        let _ = focus;
    }
}
