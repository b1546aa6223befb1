//! The standard Banking-as-a-Service deck
//!
//! Static descriptive content based on BCB Public Consultation 108/2024
//! and international BaaS market research. Display copy is kept in
//! Portuguese, as presented to the viewer; ids are stable ASCII keys.

use super::{
    BusinessModel, Connection, Deck, Opportunity, Participant, Principle, Region, RegionStat,
    Risk, RiskCategory, Section, Service, ServiceStatus, TimelineEntry, TimelineStatus,
};

pub(super) const STANDARD_DECK: Deck = Deck {
    sections: SECTIONS,
    participants: PARTICIPANTS,
    connections: CONNECTIONS,
    business_models: BUSINESS_MODELS,
    services: SERVICES,
    principles: PRINCIPLES,
    timeline: TIMELINE,
    discussion_topics: DISCUSSION_TOPICS,
    risk_categories: RISK_CATEGORIES,
    case_study: CASE_STUDY,
    opportunities: OPPORTUNITIES,
    embedded_finance_sectors: EMBEDDED_FINANCE_SECTORS,
    regions: REGIONS,
    brazil_stats: BRAZIL_STATS,
};

const SECTIONS: &[Section] = &[
    Section { id: 0, title: "Introdução", icon: "🏦" },
    Section { id: 1, title: "Ecossistema", icon: "🔄" },
    Section { id: 2, title: "Modelos de Negócio", icon: "💼" },
    Section { id: 3, title: "Serviços BaaS", icon: "⚙️" },
    Section { id: 4, title: "Regulação BCB", icon: "📋" },
    Section { id: 5, title: "Riscos", icon: "⚠️" },
    Section { id: 6, title: "Oportunidades", icon: "🚀" },
    Section { id: 7, title: "Cenário Global", icon: "🌍" },
];

const PARTICIPANTS: &[Participant] = &[
    Participant {
        id: "bank",
        name: "Instituição Prestadora",
        subtitle: "Banco, IP, SCD",
        icon: "🏛️",
        color: "#0ea5e9",
        x: 50,
        y: 20,
        responsibilities: &[
            "Licença regulatória",
            "Gestão de balanço",
            "Conformidade PLD/FT",
            "Supervisão de riscos",
            "Reporte ao BCB",
        ],
    },
    Participant {
        id: "middleware",
        name: "Middleware",
        subtitle: "Opcional",
        icon: "🔌",
        color: "#f59e0b",
        x: 50,
        y: 50,
        responsibilities: &[
            "Integração técnica",
            "APIs unificadas",
            "Gestão de programa",
            "Suporte operacional",
        ],
    },
    Participant {
        id: "fintech",
        name: "Tomador de Serviços",
        subtitle: "Fintech, Varejo",
        icon: "📱",
        color: "#8b5cf6",
        x: 50,
        y: 80,
        responsibilities: &[
            "Tecnologia e UX",
            "Aquisição de clientes",
            "Marketing",
            "Relacionamento",
        ],
    },
    Participant {
        id: "bcb",
        name: "Banco Central",
        subtitle: "Regulador",
        icon: "⚖️",
        color: "#10b981",
        x: 15,
        y: 50,
        responsibilities: &["Regulação", "Supervisão", "Autorização", "Fiscalização"],
    },
    Participant {
        id: "client",
        name: "Cliente Final",
        subtitle: "PF ou PJ",
        icon: "👤",
        color: "#ec4899",
        x: 85,
        y: 50,
        responsibilities: &[
            "Acesso a serviços",
            "Experiência integrada",
            "Proteção regulatória",
        ],
    },
];

const CONNECTIONS: &[Connection] = &[
    Connection { from: "bank", to: "middleware", label: "Contrato BaaS" },
    Connection { from: "middleware", to: "fintech", label: "APIs" },
    Connection { from: "bank", to: "fintech", label: "Supervisão" },
    Connection { from: "bcb", to: "bank", label: "Regulação" },
    Connection { from: "fintech", to: "client", label: "Serviços" },
    Connection { from: "bank", to: "client", label: "Responsabilidade" },
];

const BUSINESS_MODELS: &[BusinessModel] = &[
    BusinessModel {
        id: "direct",
        name: "Parceria Direta",
        desc: "Integração direta entre instituição e tomador",
        icon: "🤝",
        color: "#0ea5e9",
        pros: &["Maior controle", "Sem intermediários", "Flexibilidade"],
        cons: &[
            "Maior complexidade técnica",
            "Investimento em compliance",
            "Time to market maior",
        ],
        flow: &["Instituição", "Tomador", "Cliente"],
    },
    BusinessModel {
        id: "middleware",
        name: "Via Middleware",
        desc: "Plataforma intermediária facilita a integração",
        icon: "🔗",
        color: "#8b5cf6",
        pros: &[
            "Integração simplificada",
            "Time to market menor",
            "Suporte técnico",
        ],
        cons: &[
            "Dependência do intermediário",
            "Menor flexibilidade",
            "Risco adicional",
        ],
        flow: &["Instituição", "Middleware", "Tomador", "Cliente"],
    },
    BusinessModel {
        id: "api-native",
        name: "Banco Nativo API",
        desc: "Instituições construídas para BaaS desde o início",
        icon: "⚡",
        color: "#10b981",
        pros: &["Tecnologia moderna", "Alta performance", "Escalabilidade"],
        cons: &[
            "Mercado ainda em desenvolvimento",
            "Poucos players",
            "Custo elevado",
        ],
        flow: &["Banco API", "Tomador", "Cliente"],
    },
];

const SERVICES: &[Service] = &[
    Service {
        id: "account",
        name: "Contas de Pagamento",
        icon: "💳",
        color: "#0ea5e9",
        desc: "Abertura e manutenção de contas para clientes",
        details: &["Conta corrente", "Conta poupança", "Conta de pagamento pré-paga"],
        status: ServiceStatus::PredictedInDraft,
    },
    Service {
        id: "pix",
        name: "Pix",
        icon: "⚡",
        color: "#10b981",
        desc: "Serviços de pagamento instantâneo",
        details: &["Pix QR Code", "Pix Copia e Cola", "Pix Saque", "Pix Troco"],
        status: ServiceStatus::PredictedInDraft,
    },
    Service {
        id: "cards",
        name: "Emissão de Cartões",
        icon: "💎",
        color: "#8b5cf6",
        desc: "Cartões de débito, crédito e pré-pagos",
        details: &["Cartão físico", "Cartão virtual", "Tokenização"],
        status: ServiceStatus::PredictedInDraft,
    },
    Service {
        id: "credit",
        name: "Operações de Crédito",
        icon: "📈",
        color: "#f59e0b",
        desc: "Oferta e contratação de empréstimos",
        details: &["Crédito pessoal", "Financiamentos", "Antecipação de recebíveis"],
        status: ServiceStatus::UnderDiscussion,
    },
    Service {
        id: "acquiring",
        name: "Credenciamento",
        icon: "🏪",
        color: "#ec4899",
        desc: "Aceitação de instrumentos de pagamento",
        details: &[
            "Credenciamento de estabelecimentos",
            "Subcredenciamento regulado",
        ],
        status: ServiceStatus::ProposedInclusion,
    },
    Service {
        id: "itp",
        name: "Iniciação de Pagamento",
        icon: "🔄",
        color: "#06b6d4",
        desc: "Início de transações via Open Finance",
        details: &["ITP (Iniciador de Transação de Pagamento)", "Open Banking"],
        status: ServiceStatus::UnderEvaluation,
    },
    Service {
        id: "efx",
        name: "eFX - Câmbio",
        icon: "🌎",
        color: "#14b8a6",
        desc: "Pagamentos e transferências internacionais",
        details: &["Remessas internacionais", "Pagamentos cross-border"],
        status: ServiceStatus::UnderEvaluation,
    },
    Service {
        id: "investment",
        name: "Investimentos",
        icon: "📊",
        color: "#6366f1",
        desc: "Distribuição de produtos de investimento",
        details: &["CDB", "Fundos", "Previdência"],
        status: ServiceStatus::PossibleExpansion,
    },
];

const PRINCIPLES: &[Principle] = &[
    Principle {
        icon: "🔍",
        title: "Transparência",
        desc: "Clareza nas informações ao cliente sobre quem presta o serviço",
    },
    Principle {
        icon: "⚖️",
        title: "Conduta",
        desc: "Normas de comportamento para proteção do consumidor",
    },
    Principle {
        icon: "🛡️",
        title: "PLD/FT",
        desc: "Prevenção à lavagem de dinheiro e financiamento do terrorismo",
    },
    Principle {
        icon: "🔒",
        title: "Controles Internos",
        desc: "Mecanismos de acompanhamento e gestão de riscos",
    },
    Principle {
        icon: "📋",
        title: "Responsabilização",
        desc: "Definição clara de responsabilidades das partes",
    },
    Principle {
        icon: "📊",
        title: "Prudencial",
        desc: "Requerimentos de capital e patrimônio líquido em avaliação",
    },
];

const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        date: "Out/2024",
        event: "Publicação CP 108/2024",
        status: TimelineStatus::Done,
    },
    TimelineEntry {
        date: "Jan/2025",
        event: "Prazo original para contribuições",
        status: TimelineStatus::Done,
    },
    TimelineEntry {
        date: "Fev/2025",
        event: "Prazo prorrogado (CP 115/2025)",
        status: TimelineStatus::Current,
    },
    TimelineEntry {
        date: "2025",
        event: "Análise das contribuições",
        status: TimelineStatus::Pending,
    },
    TimelineEntry {
        date: "2025",
        event: "Resolução Conjunta CMN/BCB",
        status: TimelineStatus::Pending,
    },
    TimelineEntry {
        date: "TBD",
        event: "Prazo para adequação",
        status: TimelineStatus::Pending,
    },
];

const DISCUSSION_TOPICS: &[&str] = &[
    "Subcredenciamento exclusivo via BaaS",
    "Inclusão de ITP e eFX no escopo",
    "Relação com correspondentes no país",
    "Requerimentos prudenciais adicionais",
    "Prazos de adequação dos contratos",
];

const RISK_CATEGORIES: &[RiskCategory] = &[
    RiskCategory {
        category: "Regulatórios",
        color: "#ef4444",
        icon: "⚖️",
        risks: &[
            Risk {
                name: "Conformidade PLD/FT",
                severity: 5,
                desc: "Falhas em KYC e monitoramento de transações",
            },
            Risk {
                name: "True Lender",
                severity: 4,
                desc: "Questionamento sobre quem é o verdadeiro credor",
            },
            Risk {
                name: "Gestão de Terceiros",
                severity: 4,
                desc: "Supervisão inadequada de parceiros",
            },
            Risk {
                name: "Fiscalização",
                severity: 3,
                desc: "Ações de enforcement e multas",
            },
        ],
    },
    RiskCategory {
        category: "Operacionais",
        color: "#f59e0b",
        icon: "⚙️",
        risks: &[
            Risk {
                name: "Reconciliação",
                severity: 4,
                desc: "Complexidade em contas FBO/omnibus",
            },
            Risk {
                name: "Dependência Tecnológica",
                severity: 4,
                desc: "Falhas em middleware ou APIs",
            },
            Risk {
                name: "Continuidade",
                severity: 3,
                desc: "Risco de falência de parceiros (caso Synapse)",
            },
            Risk {
                name: "Segurança Cibernética",
                severity: 5,
                desc: "Ataques e vazamento de dados",
            },
        ],
    },
    RiskCategory {
        category: "Reputacionais",
        color: "#8b5cf6",
        icon: "🏢",
        risks: &[
            Risk {
                name: "Imagem Institucional",
                severity: 3,
                desc: "Associação com práticas inadequadas",
            },
            Risk {
                name: "Confiança do Cliente",
                severity: 4,
                desc: "Experiência ruim reflete em todas as partes",
            },
            Risk {
                name: "Transparência",
                severity: 3,
                desc: "Confusão sobre responsabilidades",
            },
        ],
    },
    RiskCategory {
        category: "Econômicos",
        color: "#06b6d4",
        icon: "📉",
        risks: &[
            Risk {
                name: "Modelo de Receita",
                severity: 4,
                desc: "Dependência de intercâmbio ou VC",
            },
            Risk {
                name: "Custos de Compliance",
                severity: 4,
                desc: "Aumento de investimentos regulatórios",
            },
            Risk {
                name: "Churn de Parceiros",
                severity: 3,
                desc: "Fintechs que falham ou migram",
            },
        ],
    },
];

const CASE_STUDY: &str = "A falência do middleware Synapse nos EUA deixou centenas de \
milhares de clientes sem acesso aos seus fundos, evidenciando os riscos de modelos com \
múltiplos intermediários. O caso destacou problemas críticos de reconciliação de contas \
FBO, supervisão inadequada pelos bancos parceiros e a complexidade de resolver disputas \
quando há múltiplas camadas entre o cliente e a instituição detentora dos fundos.";

const OPPORTUNITIES: &[Opportunity] = &[
    Opportunity {
        icon: "🚀",
        title: "Inclusão Financeira",
        desc: "Ampliação do acesso a serviços financeiros para populações \
               desbancarizadas através de canais não tradicionais",
        color: "#10b981",
        metrics: &["40M+ brasileiros desbancarizados", "Varejo como canal de acesso"],
    },
    Opportunity {
        icon: "💡",
        title: "Inovação",
        desc: "Desenvolvimento de novos produtos e experiências financeiras \
               integradas a jornadas de consumo",
        color: "#8b5cf6",
        metrics: &["Embedded Finance", "Finanças contextuais"],
    },
    Opportunity {
        icon: "📈",
        title: "Novos Mercados",
        desc: "Acesso a segmentos de clientes anteriormente inviáveis \
               economicamente para instituições tradicionais",
        color: "#0ea5e9",
        metrics: &["Long tail de clientes", "Nichos especializados"],
    },
    Opportunity {
        icon: "💰",
        title: "Diversificação de Receita",
        desc: "Para bancos: nova fonte de depósitos e receitas. Para fintechs: \
               monetização de base de clientes",
        color: "#f59e0b",
        metrics: &["Receita de intercâmbio", "Float de depósitos"],
    },
    Opportunity {
        icon: "⚡",
        title: "Eficiência Operacional",
        desc: "Otimização de custos através de especialização e economia de \
               escala em cada elo da cadeia",
        color: "#ec4899",
        metrics: &["APIs padronizadas", "Processos automatizados"],
    },
    Opportunity {
        icon: "🤝",
        title: "Competitividade",
        desc: "Democratização do acesso à infraestrutura bancária, permitindo \
               que novos entrantes compitam",
        color: "#06b6d4",
        metrics: &["Menor barreira de entrada", "Time to market reduzido"],
    },
];

const EMBEDDED_FINANCE_SECTORS: &[&str] =
    &["E-commerce", "Mobilidade", "SaaS B2B", "Gig Economy"];

const REGIONS: &[Region] = &[
    Region {
        name: "Estados Unidos",
        flag: "🇺🇸",
        color: "#3b82f6",
        highlight: "Durbin Amendment",
        desc: "Mercado impulsionado pela isenção de bancos <$10B dos limites de \
               intercâmbio. Escrutínio regulatório intenso.",
        cases: &["Synapse (falência)", "Evolve Bank", "Blue Ridge Bank"],
    },
    Region {
        name: "Reino Unido / UE",
        flag: "🇬🇧🇪🇺",
        color: "#8b5cf6",
        highlight: "Licenças Alternativas",
        desc: "E-money e Payment Institutions reduzem dependência de bancos. \
               Intercâmbio regulado em níveis baixos.",
        cases: &["Railsr", "Griffin", "Solaris"],
    },
    Region {
        name: "América Latina",
        flag: "🌎",
        color: "#10b981",
        highlight: "Inclusão Financeira",
        desc: "Oportunidade greenfield. Brasil lidera com Pix e Open Finance. \
               Regulação em evolução.",
        cases: &["Dock", "Pomelo", "QI Tech"],
    },
    Region {
        name: "Ásia-Pacífico",
        flag: "🌏",
        color: "#f59e0b",
        highlight: "Super Apps",
        desc: "Alta penetração de e-wallets. Incumbentes inovadores. Mercados \
               diversos.",
        cases: &["Nium", "Airwallex", "Standard Chartered"],
    },
];

const BRAZIL_STATS: &[RegionStat] = &[
    RegionStat { label: "Pix", value: "150M+", desc: "usuários" },
    RegionStat { label: "Open Finance", value: "45M+", desc: "consentimentos" },
    RegionStat { label: "Fintechs", value: "1.500+", desc: "ativas" },
    RegionStat { label: "Drex", value: "2025", desc: "lançamento" },
];
