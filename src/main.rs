use clap::Parser;
use wanted_common::{reduce, sample_records, Action, AppState, WantedRecord};
use wanted_watch::{api, cli, config, error, favorites};

use api::ApiClient;
use cli::{Cli, Commands, FavCommands};
use config::Config;
use error::Result;
use favorites::FavoritesStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let client = ApiClient::new(&config)?;

    match cli.command {
        Commands::List { page } => {
            println!("🔍 wanted-watch - 指名手配リスト (page {})\n", page);

            match client.fetch_list(page).await {
                Ok(result) => {
                    println!("✔ {}件中 {}件を表示\n", result.total, result.items.len());
                    for record in &result.items {
                        print_record_line(record);
                    }
                }
                Err(e) => {
                    // 取得失敗時は内蔵サンプルで表示を継続する
                    eprintln!("⚠ リスト取得に失敗: {}", e);
                    eprintln!("⚠ 内蔵サンプルデータで表示します\n");
                    for record in &sample_records() {
                        print_record_line(record);
                    }
                }
            }
        }

        Commands::Search { query, page } => {
            println!("🔍 wanted-watch - 検索: \"{}\" (page {})\n", query, page);

            let result = client.search(&query, page).await?;
            println!("✔ {}件が一致\n", result.total);
            for record in &result.items {
                print_record_line(record);
            }
        }

        Commands::Show { uid } => {
            println!("🔍 wanted-watch - 詳細表示: {}\n", uid);

            match fetch_with_fallback(&client, &uid, cli.verbose).await {
                Some(record) => print_record_detail(&record),
                None => println!("レコードが見つかりません: {}", uid),
            }
        }

        Commands::Fav { command } => {
            let store = FavoritesStore::open_default()?;
            let state = reduce(&AppState::default(), Action::LoadFavorites(store.load()));

            match command {
                FavCommands::Add { uid } => {
                    let Some(record) = fetch_with_fallback(&client, &uid, cli.verbose).await
                    else {
                        println!("レコードが見つかりません: {}", uid);
                        return Ok(());
                    };

                    let title = record.title.clone();
                    let action = Action::AddFavorite(record);
                    let persist = action.persists_favorites();
                    let next = reduce(&state, action);

                    if next.favorites.len() == state.favorites.len() {
                        println!("⭐ 既にお気に入りに登録済み: {}", title);
                    } else {
                        println!("⭐ お気に入りに追加: {}", title);
                    }
                    if persist {
                        store.save(&next.favorites)?;
                    }
                }

                FavCommands::Remove { uid } => {
                    let action = Action::RemoveFavorite(uid.clone());
                    let persist = action.persists_favorites();
                    let next = reduce(&state, action);

                    if next.favorites.len() == state.favorites.len() {
                        println!("☆ お気に入りに存在しません: {}", uid);
                    } else {
                        println!("☆ お気に入りから削除: {}", uid);
                    }
                    if persist {
                        store.save(&next.favorites)?;
                    }
                }

                FavCommands::List => {
                    if state.favorites.is_empty() {
                        println!("お気に入りは登録されていません");
                    } else {
                        println!("⭐ お気に入り {}件\n", state.favorites.len());
                        for record in &state.favorites {
                            print_record_line(record);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// uid指定の取得。APIが失敗した場合のみ内蔵サンプルを引く
async fn fetch_with_fallback(client: &ApiClient, uid: &str, verbose: bool) -> Option<WantedRecord> {
    match client.fetch_by_uid(uid).await {
        Ok(found) => found,
        Err(e) => {
            if verbose {
                eprintln!("⚠ API取得に失敗、サンプルデータを検索: {}", e);
            }
            sample_records().into_iter().find(|r| r.uid == uid)
        }
    }
}

fn print_record_line(record: &WantedRecord) {
    println!(
        "  [{}] {}  ({})",
        record.uid,
        record.title,
        if record.subjects.is_empty() {
            "-".to_string()
        } else {
            record.subjects.join(", ")
        }
    );
}

fn print_record_detail(record: &WantedRecord) {
    println!("名前:       {}", record.title);
    println!("uid:        {}", record.uid);

    if let Some(warning) = &record.warning_message {
        println!("⚠ 警告:     {}", warning);
    }
    if let Some(reward) = &record.reward_text {
        println!("報奨金:     {}", reward);
    }
    if !record.subjects.is_empty() {
        println!("容疑:       {}", record.subjects.join(", "));
    }

    print_optional("性別", record.sex.as_deref());
    print_optional("人種", record.race.as_deref());
    print_optional("年齢", record.age_range.as_deref());
    print_optional("身長", record.height_min.as_deref());
    print_optional("体重", record.weight.as_deref());
    print_optional("髪色", record.hair.as_deref());
    print_optional("目の色", record.eyes.as_deref());
    print_optional("国籍", record.nationality.as_deref());
    print_optional("出生地", record.place_of_birth.as_deref());

    if !record.dates_of_birth_used.is_empty() {
        println!("生年月日:   {}", record.dates_of_birth_used.join(", "));
    }
    if let Some(details) = &record.details {
        println!("\n{}", details);
    }
    if let Some(image) = record.primary_image() {
        println!("\n画像: {}", image);
    }
}

fn print_optional(label: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("{}:   {}", label, v);
    }
}
