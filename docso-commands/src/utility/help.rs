use twilight_model::{channel::message::embed::Embed, gateway::payload::incoming::MessageCreate};

use crate::{COMMANDS, CommandMeta};
use docso_core::Context;
use docso_utils::embed::build_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

/// Render the command catalog.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let embed = help_embed()?;
    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}

pub fn help_embed() -> anyhow::Result<Embed> {
    build_embed(
        "Available Commands",
        grouped_help_description(&sorted_commands()),
        None,
    )
}

fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category = "";

    for cmd in commands {
        if cmd.category != current_category {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", cmd.category));
            current_category = cmd.category;
        }
        out.push_str(&format!("`{}` {}\n", cmd.usage, cmd.desc));
    }

    out.trim_end().to_owned()
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut sorted: Vec<&'static CommandMeta> = COMMANDS.iter().collect();

    sorted.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    sorted
}
