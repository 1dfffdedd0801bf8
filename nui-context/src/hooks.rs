//! Custom Dioxus hooks for nui-context components.

use dioxus::prelude::*;

use crate::host::HostMessage;
use crate::model::ContextMenuProps;
use crate::AppState;

/// Current menu, kept in sync with the host.
///
/// Takes the host message receiver out of [`AppState`] on first run and applies
/// every `ShowContext`/`HideContext` to the returned signal.
#[must_use]
pub fn use_host_menu() -> Signal<Option<ContextMenuProps>> {
    let app_state = use_context::<AppState>();
    let mut menu = use_signal(|| None::<ContextMenuProps>);

    use_future(move || {
        let receiver = app_state.take_receiver();
        async move {
            let Some(mut receiver) = receiver else {
                tracing::warn!("host receiver already taken, menu will not update");
                return;
            };
            while let Some(message) = receiver.recv().await {
                match message {
                    HostMessage::ShowContext(next) => {
                        tracing::debug!(id = %next.id, "showing context menu");
                        menu.set(Some(next));
                    }
                    HostMessage::HideContext => menu.set(None),
                }
            }
        }
    });

    menu
}
