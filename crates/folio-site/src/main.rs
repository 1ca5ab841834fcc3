use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use folio_i18n::Language;
use folio_site::{Host, HostEvent, SiteConfig};
use web_time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with site settings
    #[arg(long, global = true, default_value = "folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page, after the splash, to a standalone HTML file
    Export {
        #[arg(long, value_enum)]
        lang: Option<Lang>,

        #[arg(long, default_value = "index.html")]
        out: PathBuf,
    },
    /// Scroll through the page and log each active-section change
    Simulate {
        /// Pixels per scroll step
        #[arg(long, default_value_t = 120.0)]
        step: f32,

        /// Milliseconds between steps
        #[arg(long, default_value_t = 16)]
        frame_ms: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Lang {
    En,
    Fr,
}

impl From<Lang> for Language {
    fn from(l: Lang) -> Self {
        match l {
            Lang::En => Language::En,
            Lang::Fr => Language::Fr,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = SiteConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Command::Export { lang, out } => {
            if let Some(lang) = lang {
                config.language = lang.into();
            }
            let mut host = Host::new(config)?;
            let html = host.export_html()?;
            fs::write(&out, html).with_context(|| format!("writing {}", out.display()))?;
            println!("wrote {}", out.display());
        }
        Command::Simulate { step, frame_ms } => {
            anyhow::ensure!(step > 0.0, "--step must be positive");
            let splash = config.splash_delay();
            let mut host = Host::new(config)?;
            host.handle(HostEvent::Advance(splash))?;

            let frame = Duration::from_millis(frame_ms);
            let mut last = host.active_section();
            println!("{:>8}  {}", 0.0, last);
            loop {
                let scroll = &host.site().state().scroll;
                if scroll.get() >= scroll.max_offset() {
                    break;
                }
                host.run([HostEvent::ScrollBy(step), HostEvent::Advance(frame)])?;
                let active = host.active_section();
                if active != last {
                    let y = host.site().state().scroll.get();
                    println!("{y:>8.0}  {active}");
                    last = active;
                }
            }
        }
    }
    Ok(())
}
