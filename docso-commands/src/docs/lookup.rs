use twilight_model::{channel::message::embed::Embed, gateway::payload::incoming::MessageCreate};

use crate::CommandMeta;
use crate::docs::embeds::{
    docs_help_embed, fetch_error_embed, function_embed, malformed_name_embed, method_embed,
    package_embed, type_embed, unsupported_kind_embed,
};
use docso_core::Context;
use docso_utils::embed::error_embed;
use docso_utils::parse::{Symbol, parse_symbol};

pub const META: CommandMeta = CommandMeta {
    name: "lookup",
    desc: "Look up documentation for a package, function, method or type.",
    category: "docs",
    usage: "!lookup <package> [func|type] [name]",
};

/// What a `lookup` invocation asks for, before any fetch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LookupRequest<'a> {
    Help,
    Package(&'a str),
    Symbol(&'a str, Symbol<'a>),
    Type(&'a str, &'a str),
}

/// Malformed `lookup` arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestError<'a> {
    TooManyArguments,
    UnsupportedKind(&'a str),
    MalformedName(&'a str),
}

/// Classify `lookup` arguments.
pub fn parse_request<'a>(args: &[&'a str]) -> Result<LookupRequest<'a>, RequestError<'a>> {
    let symbol = |package: &'a str, raw: &'a str| {
        parse_symbol(raw)
            .map(|symbol| LookupRequest::Symbol(package, symbol))
            .ok_or(RequestError::MalformedName(raw))
    };

    match *args {
        [] => Ok(LookupRequest::Help),
        [package] => Ok(LookupRequest::Package(package)),
        [package, name] => symbol(package, name),
        [package, kind, name] => match kind.to_ascii_lowercase().as_str() {
            "func" | "function" | "fn" => symbol(package, name),
            "type" => Ok(LookupRequest::Type(package, name)),
            _ => Err(RequestError::UnsupportedKind(kind)),
        },
        _ => Err(RequestError::TooManyArguments),
    }
}

/// Answer a documentation lookup with exactly one card.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, args: &[&str]) -> anyhow::Result<()> {
    let embed = match parse_request(args) {
        Ok(request) => lookup_embed(&ctx, request).await?,
        Err(RequestError::TooManyArguments) => error_embed("Too many arguments.")?,
        Err(RequestError::UnsupportedKind(kind)) => unsupported_kind_embed(kind)?,
        Err(RequestError::MalformedName(raw)) => malformed_name_embed(raw)?,
    };

    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}

async fn lookup_embed(ctx: &Context, request: LookupRequest<'_>) -> anyhow::Result<Embed> {
    let package = match request {
        LookupRequest::Help => return docs_help_embed(),
        LookupRequest::Package(package)
        | LookupRequest::Symbol(package, _)
        | LookupRequest::Type(package, _) => package,
    };

    let document = match ctx.docs.fetch_or_get(package).await {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(package, %error, "documentation lookup failed");
            return fetch_error_embed(package, &error);
        }
    };

    match request {
        LookupRequest::Help => docs_help_embed(),
        LookupRequest::Package(_) => package_embed(&document),
        LookupRequest::Symbol(_, Symbol::Function(name)) => function_embed(&document, name),
        LookupRequest::Symbol(_, Symbol::Method { receiver, name }) => {
            method_embed(&document, receiver, name)
        }
        LookupRequest::Type(_, name) => type_embed(&document, name),
    }
}
