use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::docs::embeds::fetch_error_embed;
use docso_core::Context;
use docso_utils::COMMAND_PREFIX;
use docso_utils::embed::error_embed;
use docso_utils::pagination::{SubjectKind, send_paginated_message};
use docso_utils::parse::parse_subject_kind;

pub const META: CommandMeta = CommandMeta {
    name: "pages",
    desc: "Browse a package's functions or types page by page.",
    category: "docs",
    usage: "!pages <functions|types> <package>",
};

/// Resolve `pages` arguments into a collection and a package.
///
/// The error is the body of the error card to send back.
pub fn parse_args<'a>(args: &[&'a str]) -> Result<(SubjectKind, &'a str), String> {
    match *args {
        [kind, package] => parse_subject_kind(kind).map(|kind| (kind, package)).ok_or_else(|| {
            format!("Unsupported page type {kind:?}\nValid options are:\n\t`functions`\n\t`types`")
        }),
        _ => Err(format!(
            "It seems you didn't have enough arguments, so here's an example!\n\n\
             `{COMMAND_PREFIX}pages functions strings`"
        )),
    }
}

/// Start a reaction-paginated listing of a package's functions or types.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, args: &[&str]) -> anyhow::Result<()> {
    let http = &ctx.http;

    let (subject, package) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            let embed = error_embed(message)?;
            http.create_message(msg.channel_id).embeds(&[embed]).await?;
            return Ok(());
        }
    };

    let document = match ctx.docs.fetch_or_get(package).await {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(package, %error, "documentation fetch for pages failed");
            let embed = fetch_error_embed(package, &error)?;
            http.create_message(msg.channel_id).embeds(&[embed]).await?;
            return Ok(());
        }
    };

    let state = ctx.pages.open(
        subject,
        document,
        msg.author.id.get(),
        msg.channel_id.get(),
    );

    send_paginated_message(http, &ctx.pages, msg.channel_id, state).await?;

    Ok(())
}
