use clap::{Args, Parser, Subcommand};
use flatbed_log_common::JobId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flatbed-log")]
#[command(about = "Registro de serviços do caminhão prancha", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log detalhado
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Diretório de dados (sobrepõe a configuração)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cadastrar um novo serviço
    Add {
        #[command(flatten)]
        job: JobArgs,
    },

    /// Editar um serviço (campos omitidos ficam como estão)
    Edit {
        #[arg(required = true)]
        id: JobId,

        #[command(flatten)]
        job: JobArgs,
    },

    /// Excluir um serviço
    Delete {
        #[arg(required = true)]
        id: JobId,

        /// Não pedir confirmação
        #[arg(short, long)]
        yes: bool,
    },

    /// Mostrar um serviço
    Show {
        #[arg(required = true)]
        id: JobId,
    },

    /// Listar serviços (mais recentes primeiro)
    List {
        /// Busca em contratante, motorista, frota, local, responsável e observação
        #[arg(short, long)]
        search: Option<String>,

        /// Somente este motorista (nome exato)
        #[arg(short, long)]
        driver: Option<String>,
    },

    /// Totais: serviços, km e valor
    Stats,

    /// Motoristas cadastrados
    Drivers,

    /// Gerar o comprovante (PDF) de um serviço
    Receipt {
        #[arg(required = true)]
        id: JobId,

        /// Arquivo ou diretório de saída
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Exportar a lista de serviços para Excel
    Export {
        /// Arquivo ou diretório de saída
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Mostrar/editar configuração
    Config {
        /// Mostrar configuração
        #[arg(long)]
        show: bool,

        /// Diretório padrão dos dados
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Símbolo da moeda (ex.: R$)
        #[arg(long)]
        set_currency_symbol: Option<String>,
    },
}

/// Job form fields. Money accepts locale text such as `1.234,50` or `R$ 350,00`.
#[derive(Args, Debug, Clone, Default)]
pub struct JobArgs {
    /// Data (AAAA-MM-DD, padrão: hoje)
    #[arg(long)]
    pub date: Option<String>,

    /// Contratante
    #[arg(short, long)]
    pub client: Option<String>,

    /// Local/origem
    #[arg(short, long)]
    pub origin: Option<String>,

    /// KM de saída
    #[arg(long)]
    pub km_start: Option<f64>,

    /// KM de chegada
    #[arg(long)]
    pub km_end: Option<f64>,

    /// Horário de saída (HH:MM)
    #[arg(long)]
    pub departure: Option<String>,

    /// Horário de chegada (HH:MM)
    #[arg(long)]
    pub arrival: Option<String>,

    /// Valor total do frete
    #[arg(long)]
    pub value: Option<String>,

    /// Pedágio
    #[arg(long)]
    pub toll: Option<String>,

    /// Número da frota
    #[arg(short, long)]
    pub fleet: Option<String>,

    /// Observação
    #[arg(short, long)]
    pub note: Option<String>,

    /// Motorista
    #[arg(short, long)]
    pub driver: Option<String>,

    /// Responsável
    #[arg(short, long)]
    pub responsible: Option<String>,
}
