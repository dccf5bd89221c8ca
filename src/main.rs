use beauty_ai_rust::acquisition::camera::{CameraConfig, CameraSession, FfmpegBackend};
use beauty_ai_rust::analyzer::GeminiClient;
use beauty_ai_rust::app::App;
use beauty_ai_rust::cli::{Cli, Commands};
use beauty_ai_rust::config::Config;
use beauty_ai_rust::error::{BeautyAiError, Result};
use beauty_ai_rust::{acquisition, AnalysisResult};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const ANALYSIS_FAILED_MESSAGE: &str =
    "解析中にエラーが発生しました。もう一度お試しください。";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image } => {
            println!("🌸 beauty-ai - 写真解析\n");

            let client = GeminiClient::new(&config, cli.verbose)?;
            let mut app = App::new();

            // ファイル選択はカメラを経由せず直接loadingへ
            let token = app.begin_analysis()?;

            match acquisition::load_image_file(&image) {
                Ok(payload) => {
                    let spinner = loading_spinner();
                    let result = client.analyze(&payload).await;
                    spinner.finish_and_clear();
                    app.finish_analysis(token, result);
                }
                Err(e) => {
                    // 取得失敗は外側の失敗経路: 汎用メッセージでhomeへ戻す
                    if cli.verbose {
                        eprintln!("  画像取得エラー: {}", e);
                    }
                    app.fail_analysis(token, ANALYSIS_FAILED_MESSAGE);
                }
            }

            render(&app);
        }

        Commands::Selfie { device, no_confirm } => {
            println!("🤳 beauty-ai - セルフィー解析\n");

            let client = GeminiClient::new(&config, cli.verbose)?;
            let mut app = App::new();
            app.take_selfie()?;

            let session = CameraSession::new(FfmpegBackend { device }, CameraConfig::default());

            println!("[1/3] カメラ起動中...");
            if let Err(e) = session.enter().await {
                // 取得エラーは画面内で表示し、自動リトライはしない
                eprintln!("✖ {}", e);
                app.back_to_home();
                return Ok(());
            }
            println!("✔ カメラ準備完了\n");

            if !no_confirm {
                let proceed = dialoguer::Confirm::new()
                    .with_prompt("キャプチャしますか？")
                    .default(true)
                    .interact()
                    .map_err(|e| BeautyAiError::Camera(format!("入力エラー: {}", e)))?;

                if !proceed {
                    session.leave();
                    app.back_to_home();
                    println!("キャンセルしました");
                    return Ok(());
                }
            }

            println!("[2/3] キャプチャ中...");
            let captured = session.capture();
            session.leave();

            let payload = match captured {
                Ok(Some(payload)) => payload,
                Ok(None) => {
                    eprintln!("✖ カメラの準備ができていません");
                    app.back_to_home();
                    return Ok(());
                }
                Err(e) => {
                    eprintln!("✖ {}", e);
                    app.back_to_home();
                    return Ok(());
                }
            };
            println!("✔ キャプチャ完了\n");

            println!("[3/3] AI解析中...");
            let token = app.begin_analysis()?;
            let spinner = loading_spinner();
            let result = client.analyze(&payload).await;
            spinner.finish_and_clear();
            app.finish_analysis(token, result);

            render(&app);
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  temperature: {}", config.temperature);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIキー: {}",
                    if config.api_key.is_some() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("AI解析中...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// 結果コンソール表示（結果は読み取り専用で消費する）
fn render(app: &App) {
    if let Some(result) = app.result() {
        render_result(result);
    } else if let Some(error) = app.error() {
        println!("✖ {}", error);
    }
}

fn render_result(result: &AnalysisResult) {
    println!("\n━━━ 美容指標 ━━━");
    for index in &result.beauty_indexes {
        let filled = (index.score / 10.0).round() as usize;
        let bar: String = "█".repeat(filled.min(10));
        println!(
            "  {} {:<28} {:>5.1} {}",
            index.emoji, index.name, index.score, bar
        );
    }

    println!("\n━━━ 改善ポイント ━━━");
    for problem in &result.problems {
        println!("  {} {}", problem.emoji, problem.text);
    }

    println!("\n━━━ ソリューション ━━━");
    for solution in &result.solutions {
        println!("  {} {}", solution.emoji, solution.text);
    }

    let analysis = &result.detailed_analysis;
    println!("\n━━━ 詳細解析 ━━━");
    println!("{}\n", analysis.introduction);
    println!("強み:");
    for strength in &analysis.strengths {
        println!("  + {}", strength);
    }
    println!("弱み:");
    for weakness in &analysis.weaknesses {
        println!("  - {}", weakness);
    }
    println!("\n{}\n", analysis.suggestions);
    println!("{}", analysis.conclusion);

    println!("\n✅ 解析完了");
}
