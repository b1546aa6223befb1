//! Scripted tour of the presentation
//!
//! Stands in for a real renderer: walks every section, exercises the
//! selection and hover intents, and prints the snapshot the renderer
//! would consume. Run with `RUST_LOG=debug` to watch the session's
//! internal transitions.

use std::thread;
use std::time::Duration;

use baas_deck::{Intent, ItemSpace, Session, SessionError};

const STEP: Duration = Duration::from_millis(400);

fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let mut session = Session::standard()?;
    let deck = *session.deck();

    println!("Banking as a Service — Consulta Pública BCB 108/2024");
    println!("{} seções, animação a cada 100ms\n", deck.section_count());

    for section in deck.sections {
        session.apply(Intent::SelectSection(section.id));
        println!("{} {}", section.icon, section.title);

        match section.id {
            1 => ecosystem_walk(&mut session),
            2 => business_model_walk(&mut session),
            3 => services_walk(&mut session),
            _ => thread::sleep(STEP),
        }
        print_status(&session);
    }

    println!("\nInterruptor de reprodução:");
    session.apply(Intent::TogglePlay);
    print_status(&session);
    thread::sleep(STEP);
    session.apply(Intent::TogglePlay);
    print_status(&session);

    Ok(())
}

/// Select each participant in turn; the flow freezes while one is active
fn ecosystem_walk(session: &mut Session) {
    let deck = *session.deck();
    for participant in deck.participants {
        session.apply(Intent::ToggleItem {
            space: ItemSpace::Participant,
            id: participant.id.into(),
        });
        println!(
            "  {} {} — {} responsabilidades (animação {})",
            participant.icon,
            participant.name,
            participant.responsibilities.len(),
            if session.is_running() { "ativa" } else { "congelada" },
        );
        thread::sleep(STEP / 2);
        session.apply(Intent::ToggleItem {
            space: ItemSpace::Participant,
            id: participant.id.into(),
        });
    }
}

fn business_model_walk(session: &mut Session) {
    let deck = *session.deck();
    for model in deck.business_models {
        session.apply(Intent::ToggleItem {
            space: ItemSpace::BusinessModel,
            id: model.id.into(),
        });
        println!(
            "  {} {}: {} — fluxo {}",
            model.icon,
            model.name,
            model.desc,
            model.flow.join(" → "),
        );
        thread::sleep(STEP / 2);
    }
    // Deselect the last model so the flow cues resume
    if let Some(last) = deck.business_models.last() {
        session.apply(Intent::ToggleItem {
            space: ItemSpace::BusinessModel,
            id: last.id.into(),
        });
    }
}

/// Hovering services highlights them without ever pausing the animation
fn services_walk(session: &mut Session) {
    let deck = *session.deck();
    for service in deck.services {
        session.apply(Intent::HoverItem {
            space: ItemSpace::Service,
            id: service.id.into(),
        });
        println!("  {} {} [{}]", service.icon, service.name, service.status.label());
        thread::sleep(STEP / 8);
    }
    session.apply(Intent::UnhoverItem { space: ItemSpace::Service });
}

fn print_status(session: &Session) {
    let snapshot = session.snapshot();
    println!(
        "  → seção {} '{}', fase {:02}, {}\n",
        snapshot.section.id,
        snapshot.section.title,
        snapshot.phase,
        if snapshot.running { "rodando" } else { "pausada" },
    );
}
