//! hwalyong - 한국어 동사/형용사 활용표 출력

use clap::Parser;
use hwalyong::config::{load_config, save_config, OutputFormat};
use hwalyong::Paradigm;

/// 기본형(-다)을 받아 활용표를 출력
#[derive(Parser, Debug)]
#[command(name = "hwalyong", version, about = "한국어 동사/형용사 활용표")]
struct Cli {
    /// 기본형 (예: 가다, 먹다, 돕다)
    word: String,
    /// 형용사로 활용
    #[arg(long)]
    adjective: bool,
    /// 불규칙 활용 적용 (ㄷ, ㄹ, ㅂ, ㅅ, ㅎ, 르)
    #[arg(long)]
    irregular: bool,
    /// JSON 으로 출력
    #[arg(long)]
    json: bool,
    /// 현재 출력 설정을 설정 파일에 저장
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드, 명령줄 옵션이 우선
    let mut config = load_config();
    if cli.json {
        config.format = OutputFormat::Json;
    }
    if cli.write_config {
        save_config(&config)?;
    }

    let mut paradigm = Paradigm::build(&cli.word, !cli.adjective, cli.irregular)?;

    match config.format {
        OutputFormat::Text => {
            print!("{}", paradigm.render_text(config.show_stems, config.show_non_finite));
        }
        OutputFormat::Json => {
            if !config.show_stems {
                paradigm.stems.clear();
            }
            if !config.show_non_finite {
                paradigm.connective.clear();
                paradigm.determiner.clear();
                paradigm.noun.clear();
            }
            println!("{}", serde_json::to_string_pretty(&paradigm)?);
        }
    }
    Ok(())
}
