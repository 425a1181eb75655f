//! Redirect loop detection.
//!
//! Decides whether a recorded session shows the client being redirected
//! back to a URL it has already visited. Detection is method-aware: a
//! deliberate method change (e.g. a HEAD preflight phase followed by a GET
//! phase) starts a new group, and revisiting a URL across groups is not a
//! loop.

use super::store::TransactionStore;

/// Stateless detector over a read-only view of a [`TransactionStore`].
///
/// Never mutates the store and never fails; the answer is always a plain
/// boolean for the store's content at call time.
#[derive(Debug)]
pub struct RedirectLoopDetector<'a> {
    store: &'a TransactionStore,
}

impl<'a> RedirectLoopDetector<'a> {
    /// Creates a detector over the given store.
    pub fn new(store: &'a TransactionStore) -> Self {
        Self { store }
    }

    /// Returns true if the recorded session is caught in a redirect loop.
    ///
    /// A loop can only be claimed when every recorded response is a
    /// redirect; a single non-redirect response means the session made
    /// progress somewhere and short-circuits to false. Within each maximal
    /// run of same-method requests, any URL recurring at a later position
    /// counts as a loop.
    pub fn has_redirect_loop(&self) -> bool {
        if self.contains_any_non_redirect_responses() {
            return false;
        }

        self.url_groups_by_method_change()
            .iter()
            .any(|group| Self::url_set_has_redirect_loop(group))
    }

    fn url_set_has_redirect_loop(urls: &[&str]) -> bool {
        urls.iter()
            .enumerate()
            .any(|(index, url)| urls[index + 1..].contains(url))
    }

    fn contains_any_non_redirect_responses(&self) -> bool {
        // Statuses of exactly 300 and 400 are deliberately non-redirect
        // here; callers depend on this exact boundary.
        self.store
            .responses()
            .into_iter()
            .flatten()
            .any(|response| response.status_code <= 300 || response.status_code >= 400)
    }

    /// Partitions request URLs into maximal contiguous same-method runs.
    fn url_groups_by_method_change(&self) -> Vec<Vec<&str>> {
        let mut groups = Vec::new();
        let mut current_group = Vec::new();
        let mut current_method: Option<&str> = None;

        for request in self.store.requests() {
            let method = request.method.as_str();

            if current_method.is_none() {
                current_method = Some(method);
            }

            if current_method != Some(method) {
                groups.push(std::mem::take(&mut current_group));
                current_method = Some(method);
            }

            current_group.push(request.uri.as_str());
        }

        groups.push(current_group);

        groups
    }
}
