use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use receiptgen_runtime::FormStateStore;
use std::sync::Arc;

use crate::context::{CloseHook, ExecutionContext};
use crate::presentation::renderers::{TuiApp, TuiEvent};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the interactive form needs a terminal; use `receiptgen submit` instead");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let channel = TuiApp::channel();
    let close_tx = channel.0.clone();
    let on_close: CloseHook = Box::new(move || {
        let _ = close_tx.send(TuiEvent::CloseRequested);
    });
    let host = ctx.host(Some(on_close))?;

    let identity = ctx.identity(host.clone());
    if identity.effective_user_id().is_none() {
        tracing::warn!("no user id from host or launch url; submissions will be rejected");
    }
    let controller = Arc::new(ctx.controller(host)?);

    TuiApp::new(channel, controller, identity, runtime.handle().clone()).run(FormStateStore::new())
}
