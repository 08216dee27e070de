use clap::Parser;
use flatbed_log::{cli, commands, config, error, export};
use flatbed_log_common::{
    count_badge, distinct_drivers, empty_state, job_cards, receipt_document, JobCard, JobQuery,
    JobStats,
};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::load()?;
    let fmt = config.money.clone();

    match cli.command {
        Commands::Add { job } => {
            let mut service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            let today = chrono::Local::now().date_naive();
            let fields = job.into_new_fields(&fmt, today)?;
            let created = service.create(fields)?;

            print!("{}", commands::render_card(&JobCard::from_job(&created, &fmt)));
            println!("✔ Serviço cadastrado com sucesso! (#{})", created.id);
        }

        Commands::Edit { id, job } => {
            let mut service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            let base = service
                .find_by_id(id)
                .map(|j| j.fields())
                .ok_or(flatbed_log_common::Error::NotFound(id))?;
            let fields = job.apply_to(base, &fmt)?;
            let updated = service.update(id, fields)?;

            print!("{}", commands::render_card(&JobCard::from_job(&updated, &fmt)));
            println!("✔ Serviço atualizado com sucesso!");
        }

        Commands::Delete { id, yes } => {
            let mut service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            let Some(job) = service.find_by_id(id) else {
                println!("Serviço #{} não encontrado", id);
                return Ok(());
            };

            print!("{}", commands::render_card(&JobCard::from_job(job, &fmt)));
            if !yes && !commands::confirm("Tem certeza que deseja excluir este serviço?")? {
                println!("Exclusão cancelada");
                return Ok(());
            }

            if service.delete(id)? {
                println!("✔ Serviço excluído com sucesso!");
            }
        }

        Commands::Show { id } => {
            let service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            match service.find_by_id(id) {
                Some(job) => print!("{}", commands::render_card(&JobCard::from_job(job, &fmt))),
                None => println!("Serviço #{} não encontrado", id),
            }
        }

        Commands::List { search, driver } => {
            let service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            let query = JobQuery { search, driver };
            let matching = query.apply(service.jobs());

            if matching.is_empty() {
                print!("{}", commands::render_empty_state(&empty_state(query.is_filtered())));
                return Ok(());
            }

            for card in job_cards(matching.iter().copied(), &fmt) {
                println!("{}", commands::render_card(&card));
            }
            println!("{}", count_badge(matching.len()));
        }

        Commands::Stats => {
            let service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            let stats = JobStats::from_jobs(service.jobs());
            print!("{}", commands::render_stats(&stats.display(&fmt)));
        }

        Commands::Drivers => {
            let service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            for driver in distinct_drivers(service.jobs()) {
                println!("{}", driver);
            }
        }

        Commands::Receipt { id, output } => {
            let service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            let Some(receipt) = receipt_document(service.jobs(), id, &fmt) else {
                println!("Serviço #{} não encontrado, nenhum comprovante gerado", id);
                return Ok(());
            };

            let output_path = export::output_path_for(
                output.as_deref(),
                &export::pdf::default_receipt_file_name(&receipt),
            );
            println!("- Gerando comprovante...");
            export::pdf::generate_receipt_pdf(&receipt, &output_path)?;
            println!("✔ Comprovante: {}", output_path.display());
        }

        Commands::Export { output } => {
            let service = commands::open_service(&config.resolve_data_dir(cli.data_dir.as_deref())?);
            let output_path = export::output_path_for(
                output.as_deref(),
                &format!("{}.xlsx", config.export_title),
            );
            println!("- Gerando Excel...");
            export::excel::generate_excel(service.jobs(), &output_path, &config.export_title)?;
            println!("✔ Excel: {} ({})", output_path.display(), count_badge(service.jobs().len()));
        }

        Commands::Config { show, set_data_dir, set_currency_symbol } => {
            let mut config = config;
            let changed = set_data_dir.is_some() || set_currency_symbol.is_some();

            if let Some(dir) = set_data_dir {
                config.data_dir = Some(dir);
            }
            if let Some(symbol) = set_currency_symbol {
                config.money.symbol = symbol;
            }
            if changed {
                config.save()?;
                println!("✔ Configuração salva: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Configuração:");
                println!("  Dados: {}", config.resolve_data_dir(cli.data_dir.as_deref())?.display());
                println!("  Moeda: {}", config.money.format(1234.5));
                println!("  Planilha: {}", config.export_title);
            }
        }
    }

    Ok(())
}
