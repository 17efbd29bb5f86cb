use clap::Parser;
use crabby_quiz::{
    config::{QuestionFiles, QuizConfig},
    names, AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding one sub-directory per question.
    #[arg(short, long, env, default_value = names::DEFAULT_QUESTIONS_DIR)]
    questions_dir: String,

    /// Number of questions in one round.
    #[arg(short = 'n', long, env, default_value_t = names::DEFAULT_QUIZ_LEN)]
    quiz_len: usize,

    /// Question ids the quiz draws from.
    #[arg(
        short,
        long,
        env = "QUIZ_BANK",
        value_delimiter = ',',
        default_values_t = names::DEFAULT_BANK.to_vec()
    )]
    bank: Vec<u32>,

    /// Name of the program file inside a question directory.
    #[arg(long, env, default_value = names::PROMPT_FILENAME)]
    prompt_file: String,

    /// Name of the hint file inside a question directory.
    #[arg(long, env, default_value = names::HINT_FILENAME)]
    hint_file: String,

    /// Name of the explanation file inside a question directory.
    #[arg(long, env, default_value = names::EXPLANATION_FILENAME)]
    explanation_file: String,

    /// Name of the solution file inside a question directory.
    #[arg(long, env, default_value = names::SOLUTION_FILENAME)]
    solution_file: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,crabby_quiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let config = QuizConfig::new(args.questions_dir, args.bank, args.quiz_len)?.with_files(
        QuestionFiles {
            prompt: args.prompt_file,
            hint: args.hint_file,
            explanation: args.explanation_file,
            solution: args.solution_file,
        },
    );
    let state = AppState::new(config);
    state.store.verify(state.config.bank())?;

    let app = crabby_quiz::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
