use anyhow::{bail, Context, Result};
use ashwatth_lib::config::AppConfig;
use ashwatth_lib::conversation::SubmitOutcome;
use ashwatth_lib::projects::{MessageRole, ProjectDraft, ProjectsManager};
use ashwatth_lib::view::{MainTab, SubTab};
use ashwatth_lib::workspace::{PageLoad, ProjectWorkspace};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let (store, responder) = ashwatth_lib::build_services(&config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Describe your engineering project idea:");
    let Some(description) = lines.next_line().await? else {
        return Ok(());
    };

    let projects = ProjectsManager::new(store.clone(), responder.clone());
    let created = projects
        .create(ProjectDraft::new(description))
        .await
        .context("Error creating project. Please try again.")?;
    println!("-> {}", created.route.path());

    let mut workspace = match ProjectWorkspace::mount(&created.id, store, responder, &config).await {
        PageLoad::Ready(workspace) => workspace,
        PageLoad::Redirect(route) => bail!("Project {} vanished, back to {}", created.id, route.path()),
    };

    println!("== {} ==", workspace.title().await);
    let printed = print_new_messages(&workspace, 0).await;
    let result = run_loop(&mut workspace, &mut lines, printed).await;
    workspace.unmount().await;
    result
}

async fn run_loop(
    workspace: &mut ProjectWorkspace,
    lines: &mut Lines<BufReader<Stdin>>,
    mut printed: usize,
) -> Result<()> {
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "/quit" => break,
            "/tab" => match arg.parse::<MainTab>() {
                Ok(tab) => workspace.view_mut().set_main_tab(tab),
                Err(e) => eprintln!("{}", e),
            },
            "/sub" => match arg.parse::<SubTab>() {
                Ok(tab) => workspace.view_mut().set_sub_tab(tab),
                Err(e) => eprintln!("{}", e),
            },
            "/attach" => workspace.conversation().attach_file(arg).await,
            "/reset" => {
                if let Err(e) = workspace.conversation().reset_remote().await {
                    eprintln!("Reset failed: {}", e);
                }
            }
            _ => {
                if workspace.conversation().submit(line).await == SubmitOutcome::Ignored {
                    continue;
                }
            }
        }

        let view = workspace.view();
        match view.visible_sub_tab() {
            Some(sub) => println!("[{} / {}]", view.active_main_tab().label(), sub.label()),
            None => println!("[{}]", view.active_main_tab().label()),
        }
        printed = print_new_messages(workspace, printed).await;
    }

    Ok(())
}

async fn print_new_messages(workspace: &ProjectWorkspace, already_printed: usize) -> usize {
    let messages = workspace.conversation().messages().await;
    for message in messages.iter().skip(already_printed) {
        let who = match message.role {
            MessageRole::User => "you",
            MessageRole::Assistant => "assistant",
        };
        println!("{} {:>9}: {}", message.display_time(), who, message.content);
    }
    messages.len()
}
