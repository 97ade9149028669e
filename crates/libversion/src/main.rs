use anyhow::Context;
use anyhow::Result;
use clap::{arg, ArgAction, Command};
use libversion::{Flags, VersionOwned};

struct SideFlag {
    left: &'static str,
    right: &'static str,
    flag: Flags,
    help: &'static str,
}

static SIDE_FLAGS: [SideFlag; 4] = [
    SideFlag { left: "p-is-patch-left", right: "p-is-patch-right", flag: Flags::P_IS_PATCH, help: "a lone p means patch" },
    SideFlag { left: "any-is-patch-left", right: "any-is-patch-right", flag: Flags::ANY_IS_PATCH, help: "any letter run means post-release" },
    SideFlag { left: "lower-bound-left", right: "lower-bound-right", flag: Flags::LOWER_BOUND, help: "compare below every version starting with it" },
    SideFlag { left: "upper-bound-left", right: "upper-bound-right", flag: Flags::UPPER_BOUND, help: "compare above every version starting with it" },
];

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl SideFlag {
    fn switch(&self, side: Side) -> &'static str {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

fn side_switches(side: Side) -> impl Iterator<Item = clap::Arg> {
    SIDE_FLAGS.iter().map(move |f| {
        clap::Arg::new(f.switch(side))
            .long(f.switch(side))
            .help(f.help)
            .action(ArgAction::SetTrue)
            .conflicts_with("sort")
    })
}

fn args() -> Command {
    Command::new("version_compare")
        .about("Compare version strings")
        .long_about("Compare two versions and print <, = or >. With --sort, sort any number of versions.")
        .arg(arg!(versions: <version>... "Versions to compare"))
        .arg(arg!(--sort "sort and dedup the versions, print one per line"))
        .arg(arg!(--descending "with --sort, print the greatest version first")
            .requires("sort")
        )
        .arg(arg!(--explain "print the units each version breaks into"))
        .args(side_switches(Side::Left))
        .args(side_switches(Side::Right))
}

fn side_flags(matches: &clap::ArgMatches, side: Side) -> Flags {
    let mut flags = Flags::empty();
    for f in SIDE_FLAGS.iter() {
        if matches.get_flag(f.switch(side)) {
            flags |= f.flag;
        }
    }
    flags
}

fn explain(v: &str, flags: Flags) {
    let units = libversion::decompose(v, flags)
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    eprintln!("{v}: {units}");
}

fn main() -> Result<()> {

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("LIBVERSION_LOG"))
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let matches = args().get_matches_from(wild::args());

    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let versions = versions.map(String::as_str).collect::<Vec<_>>();

    if matches.get_flag("sort") {

        if matches.get_flag("explain") {
            for v in &versions {
                explain(v, Flags::empty());
            }
        }

        let mut versions = versions.into_iter().map(VersionOwned::new).collect::<Vec<_>>();
        versions.sort();
        versions.dedup();

        if matches.get_flag("descending") {
            versions.reverse();
        }

        for v in versions {
            println!("{v}");
        }

        return Ok(());
    }

    let [v1, v2] = versions.as_slice() else {
        anyhow::bail!("expected exactly two versions, got {}", versions.len());
    };

    let v1_flags = side_flags(&matches, Side::Left);
    let v2_flags = side_flags(&matches, Side::Right);

    if matches.get_flag("explain") {
        explain(v1, v1_flags);
        explain(v2, v2_flags);
    }

    let result = libversion::compare_each(*v1, *v2, v1_flags, v2_flags);
    tracing::debug!(v1, v2, ?v1_flags, ?v2_flags, ?result, "compare");

    let symbol = match result {
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
        std::cmp::Ordering::Greater => ">",
    };
    println!("{symbol}");

    Ok(())
}
