use anyhow::{Result, bail};
use receiptgen_runtime::FormStateStore;
use receiptgen_types::FormField;

use crate::args::SubmitArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_submission;
use crate::presentation::renderers::ConsoleRenderer;

pub fn handle(ctx: &ExecutionContext, args: SubmitArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let host = ctx.host(None)?;
    let identity = ctx.identity(host.clone());
    let controller = ctx.controller(host)?;

    let mut store = FormStateStore::new();
    apply_overrides(&mut store, &args);
    let snapshot = store.snapshot();

    let result = runtime.block_on(controller.submit(&snapshot, &identity));
    // The process exits right after printing, so a pending auto-close is
    // cancelled instead of awaited
    controller.shutdown();

    let Some(result) = result else {
        bail!("a submission is already in flight");
    };

    ConsoleRenderer::new(ctx.format).render_display(&present_submission(&result))?;

    if !result.is_success() {
        bail!("receipt was not generated ({})", result.kind());
    }
    Ok(())
}

/// Flags replace the seeded values field by field
fn apply_overrides(store: &mut FormStateStore, args: &SubmitArgs) {
    if let Some(template) = args.template {
        let template: receiptgen_types::TemplateType = template.into();
        store.update(FormField::TemplateType, template.as_str());
    }

    let overrides = [
        (FormField::MerchantName, &args.merchant),
        (FormField::ReceiverId, &args.receiver_id),
        (FormField::Amount, &args.amount),
        (FormField::Date, &args.date),
        (FormField::Time, &args.time),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            store.update(field, value);
        }
    }
}
