//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// thinkblog static blog generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: thinkblog.toml)
    #[arg(short = 'C', long, default_value = "thinkblog.toml")]
    pub config: PathBuf,

    /// subcommands, `build` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate index, summary, rss feed and post manifest
    Build,

    /// Run the viewer once and print the resulting page
    View(ViewArgs),

    /// Serve the project root over http
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Arguments of the `view` subcommand, applied in declaration order
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewArgs {
    /// Open the post with this slug (same as `?post=<slug>`)
    #[arg(short, long)]
    pub post: Option<String>,

    /// Site directory or http(s) base url (default: the build source directory)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Then navigate to these posts, one history entry each
    #[arg(long, value_name = "SLUG")]
    pub then: Vec<String>,

    /// Then step back this many history entries
    #[arg(long, default_value_t = 0)]
    pub back: usize,

    /// Then step forward this many history entries
    #[arg(long, default_value_t = 0)]
    pub forward: usize,

    /// Finally filter the post list
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show posts as escaped plain text instead of rendered markdown
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_builds() {
        let cli = Cli::parse_from(["thinkblog"]);
        assert!(matches!(cli.command(), Commands::Build));
        assert_eq!(cli.config, PathBuf::from("thinkblog.toml"));
    }

    #[test]
    fn test_view_args() {
        let cli = Cli::parse_from(["thinkblog", "view", "--post", "hello", "--from", "site"]);
        match cli.command() {
            Commands::View(args) => {
                assert_eq!(args.post.as_deref(), Some("hello"));
                assert_eq!(args.search, None);
                assert_eq!(args.from.as_deref(), Some("site"));
                assert!(args.then.is_empty());
                assert_eq!((args.back, args.forward), (0, 0));
                assert!(!args.plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_view_navigation_args() {
        let cli = Cli::parse_from([
            "thinkblog", "view", "--then", "a", "--then", "b", "--back", "2", "--forward", "1",
            "--plain",
        ]);
        let Commands::View(args) = cli.command() else {
            panic!("expected view");
        };
        assert_eq!(args.then, ["a", "b"]);
        assert_eq!(args.back, 2);
        assert_eq!(args.forward, 1);
        assert!(args.plain);
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::parse_from(["thinkblog", "--root", "blog", "serve", "-p", "8080"]);
        assert_eq!(cli.root, Some(PathBuf::from("blog")));
        assert!(matches!(
            cli.command(),
            Commands::Serve {
                port: Some(8080),
                ..
            }
        ));
    }
}
