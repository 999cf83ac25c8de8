use std::env;
use std::ffi::OsStr;
#[cfg(feature = "lettre")]
use std::fs;
#[cfg(feature = "lettre")]
use std::path::Path;
use std::path::PathBuf;

#[cfg(feature = "lettre")]
use anyhow::Context as _;
#[cfg(feature = "lettre")]
use lettre::message::header::ContentType;
#[cfg(feature = "lettre")]
use lettre::message::{Attachment, SinglePart};
#[cfg(feature = "lettre")]
use lettre::Transport;
use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use service_report::generate_report;
use service_report::input::Config;
#[cfg(feature = "lettre")]
use service_report::GeneratedDocument;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    /// Logs the error and exits, seahorse actions can not return errors.
    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context()
                .string_flag(name)
                .ok()
                .filter(|value| !value.is_empty())
        }

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.optional_string_flag(name)
                .ok_or_else(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let global = context.required_path_flag("global")?;
    let records = dunce::canonicalize(context.required_path_flag("records")?)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut config = Config::try_from_files(&records, &global)?;

    if let Some(output) = context.optional_string_flag("output") {
        config.output_dir(output);
    }

    if let Some(ids) = context.optional_string_flag("ids") {
        config.ids(
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        );
    }

    if let Some(operator) = context.optional_string_flag("operator") {
        config.operator(operator);
    }

    let config = config.build()?;

    info!("finished building config");

    Ok(config)
}

fn make(config: &Config) -> anyhow::Result<PathBuf> {
    generate_report(config)
}

#[cfg(feature = "lettre")]
fn attachment_from_file(path: &Path) -> anyhow::Result<SinglePart> {
    let filename = path
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| anyhow::anyhow!("invalid file name in path \"{}\"", path.display()))?
        .to_string();

    Ok(Attachment::new(filename).body(
        fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?,
        ContentType::parse(GeneratedDocument::CONTENT_TYPE)?,
    ))
}

#[cfg(feature = "lettre")]
fn send(config: &Config, recipient: &str, subject: &str, keep_docx: bool) -> anyhow::Result<()> {
    let mail = config
        .mail()
        .ok_or_else(|| anyhow::anyhow!("missing mail config in global config"))?;

    let subject = subject.replace("{count}", &config.records().len().to_string());

    let path = make(config)?;

    let email = mail
        .builder()?
        .to(recipient.parse()?)
        .subject(&subject)
        .singlepart(attachment_from_file(&path)?)?;

    info!(
        "sending email to \"{}\" with subject \"{}\"",
        recipient, &subject
    );

    mail.to_transport()?.send(&email).with_context(|| {
        format!(
            "failed to send email to \"{}\" with subject \"{}\"",
            recipient, subject
        )
    })?;

    info!("sent email successfully");

    if !keep_docx {
        info!("removing docx file");
        fs::remove_file(&path)?;
    }

    Ok(())
}

fn make_action(context: &Context) {
    exit_on_error(build_config(context).and_then(|config| make(&config).map(|_| ())));
}

#[cfg(feature = "lettre")]
fn send_action(context: &Context) {
    exit_on_error((|| {
        let config = build_config(context)?;
        let subject = context.required_string_flag("subject")?;

        if context.args.len() != 1 {
            return Err(anyhow::anyhow!("missing recipient or too many arguments"));
        }

        let keep_docx = context.bool_flag("keep-docx");

        let recipient = &context.args[0];
        info!("recipient: \"{}\"", recipient);

        send(&config, recipient, &subject, keep_docx)
    })());
}

fn input_flags(command: Command) -> Command {
    command
        .flag(Flag::new("records", FlagType::String).description("Path to the records file (json)."))
        .flag(Flag::new("global", FlagType::String).description("Path to the global file (toml)."))
        .flag(Flag::new("output", FlagType::String).description(
            "[optional] Path to the output folder. Default: `<path to records>/raporty/`",
        ))
        .flag(Flag::new("ids", FlagType::String).description(
            "[optional] Comma separated ids of the records to include. Default: all records",
        ))
        .flag(Flag::new("operator", FlagType::String).description(
            "[optional] Name printed after `utworzył:`. Default: operator of the global file",
        ))
}

fn run() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("service-report", String::as_str);

    let make_command = input_flags(
        Command::new("make")
            .usage(format!("{} make [args]", program))
            .description("Makes a service report from the given records."),
    )
    .action(make_action);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", program))
        .command(make_command);

    #[cfg(feature = "lettre")]
    let app = app.command(
        input_flags(
            Command::new("send")
                .usage(format!("{} send [args] recipient@example.com", program))
                .description("Makes a service report and sends it to the email."),
        )
        .flag(Flag::new("subject", FlagType::String).description(
            "The title of the email. `{count}` will be replaced with the number of records.",
        ))
        .flag(Flag::new("keep-docx", FlagType::Bool).description(
            "[optional] Keeps the docx file after sending the email. Default: false",
        ))
        .action(send_action),
    );

    app.run(args);
}
