use chrono::Datelike;
use log::error;
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icons::{ChevronDownIcon, QuoteIcon};
use crate::config;
use crate::content::{self, SiteContent};
use crate::hooks::{use_message_cycle, use_scrolled_past};

#[derive(Properties, PartialEq)]
pub struct TributeProps {
    pub content: SiteContent,
}

#[function_component(Tribute)]
pub fn tribute(props: &TributeProps) -> Html {
    let content = &props.content;

    html! {
        <div class="tribute">
            <Header brand={content.brand.clone()} nav={content.nav.clone()} />
            <main>
                <Hero hero={content.hero.clone()} />
                <Universe universe={content.universe.clone()} />
                <Sagas sagas={content.sagas.clone()} />
                <Heroes heroes={content.heroes.clone()} />
                <Quotes quotes={content.quotes.clone()} />
            </main>
            <Footer footer={content.footer.clone()} />
            <style>
                {r#"
                .tribute {
                    font-family: 'Inter', sans-serif;
                    background: #ffffff;
                    margin: 0;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-heading {
                    text-align: center;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1f2937;
                    margin-bottom: 3rem;
                }
                html.scroll-smooth {
                    scroll-behavior: smooth;
                }
                .reveal {
                    padding: 5rem 0;
                    opacity: 0;
                    transform: translateY(1.25rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: String,
    pub nav: Vec<content::NavLink>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_scrolled_past(config::HEADER_SCROLL_OFFSET);

    html! {
        <header class={classes!("top-header", scrolled.then(|| "scrolled"))}>
            <div class="container header-content">
                <h1 class="header-brand">
                    <a href="#hero">{props.brand.clone()}</a>
                </h1>
                <nav class="header-nav">
                    { props.nav.iter().map(|link| html! {
                        <a key={link.anchor.clone()} href={format!("#{}", link.anchor)}>{link.label.clone()}</a>
                    }).collect::<Html>() }
                </nav>
            </div>
            <style>
                {r#"
                .top-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-header.scrolled {
                    background: rgba(17, 24, 39, 0.9);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    backdrop-filter: blur(4px);
                }
                .header-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }
                .header-brand {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    font-family: 'Marvel', sans-serif;
                }
                .header-brand a,
                .header-nav a {
                    color: #ffffff;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .header-brand a:hover,
                .header-nav a:hover {
                    color: #ef4444;
                }
                .header-nav {
                    display: flex;
                    gap: 2rem;
                }
                @media (max-width: 768px) {
                    .header-nav {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: content::Hero,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;

    html! {
        <section id="hero" class="hero" style={format!("background-image: url('{}');", hero.background)}>
            <div class="hero-overlay"></div>
            <div class="hero-text">
                <h2>{hero.title.clone()}</h2>
                <p>{hero.subtitle.clone()}</p>
            </div>
            <a href="#universe" class="hero-scroll">
                <ChevronDownIcon />
            </a>
            <style>
                {r#"
                .hero {
                    height: 100vh;
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    color: #ffffff;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: #000000;
                    opacity: 0.6;
                }
                .hero-text {
                    text-align: center;
                    z-index: 10;
                    padding: 1rem;
                }
                .hero-text h2 {
                    font-size: clamp(3.75rem, 8vw, 6rem);
                    font-weight: 800;
                    text-transform: uppercase;
                    margin: 0;
                    text-shadow: 2px 2px 8px rgba(0, 0, 0, 0.7);
                    font-family: 'Marvel', sans-serif;
                }
                .hero-text p {
                    margin-top: 1rem;
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: #e5e7eb;
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 2.5rem;
                    z-index: 10;
                    color: #ffffff;
                    animation: bounce 1s infinite;
                }
                .icon-chevron {
                    width: 2rem;
                    height: 2rem;
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct UniverseProps {
    pub universe: content::Universe,
}

#[function_component(Universe)]
pub fn universe(props: &UniverseProps) -> Html {
    let universe = &props.universe;

    html! {
        <AnimatedSection id="universe" class="universe">
            <div class="container universe-grid">
                <div class="universe-text">
                    <h3>{universe.heading.clone()}</h3>
                    { universe.paragraphs.iter().map(|p| html! { <p>{p.clone()}</p> }).collect::<Html>() }
                </div>
                <div class="universe-image">
                    <img src={universe.image.url.clone()} alt={universe.image.alt.clone()} loading="lazy" />
                </div>
            </div>
            <style>
                {r#"
                .universe {
                    background: #f9fafb;
                }
                .universe-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .universe-text h3 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1f2937;
                    margin-bottom: 1rem;
                }
                .universe-text p {
                    color: #4b5563;
                    line-height: 1.625;
                    margin-bottom: 1rem;
                }
                .universe-image img {
                    width: 100%;
                    height: auto;
                    border-radius: 0.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    object-fit: cover;
                }
                @media (max-width: 768px) {
                    .universe-grid {
                        grid-template-columns: 1fr;
                    }
                    .universe-image {
                        order: -1;
                    }
                }
                "#}
            </style>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub event: content::TimelineEvent,
    #[prop_or_default]
    pub reverse: bool,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let event = &props.event;

    html! {
        <div class={classes!("timeline-item", props.reverse.then(|| "reverse"))}>
            <div class="timeline-spacer"></div>
            <div class="timeline-dot"></div>
            <div class="timeline-card">
                <p class="timeline-year">{event.year.clone()}</p>
                <h4>{event.title.clone()}</h4>
                <p class="timeline-description">{event.description.clone()}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SagasProps {
    pub sagas: content::Sagas,
}

#[function_component(Sagas)]
pub fn sagas(props: &SagasProps) -> Html {
    let sagas = &props.sagas;

    html! {
        <AnimatedSection id="sagas" class="sagas">
            <div class="container">
                <h3 class="section-heading">{sagas.heading.clone()}</h3>
                <div class="timeline">
                    { sagas.events.iter().enumerate().map(|(i, event)| html! {
                        <TimelineItem key={event.year.clone()} event={event.clone()} reverse={i % 2 == 1} />
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .sagas {
                    background: #ffffff;
                }
                .timeline {
                    position: relative;
                    overflow: hidden;
                }
                .timeline::after {
                    content: '';
                    position: absolute;
                    top: 0;
                    left: 50%;
                    height: 100%;
                    width: 2px;
                    margin-left: -1px;
                    background: #e5e7eb;
                }
                .timeline-item {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    width: 100%;
                    margin-bottom: 2rem;
                }
                .timeline-item.reverse {
                    flex-direction: row-reverse;
                }
                .timeline-spacer {
                    width: 41.66%;
                }
                .timeline-dot {
                    z-index: 20;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: #dc2626;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }
                .timeline-card {
                    width: 41.66%;
                    padding: 1rem 1.5rem;
                    border-radius: 0.5rem;
                    background: #f3f4f6;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .timeline-item.reverse .timeline-card {
                    background: #dc2626;
                    color: #ffffff;
                }
                .timeline-year {
                    font-weight: 700;
                    color: #dc2626;
                    margin: 0;
                }
                .timeline-item.reverse .timeline-year {
                    color: #ffffff;
                }
                .timeline-card h4 {
                    font-weight: 700;
                    font-size: 1.125rem;
                    margin: 0.25rem 0;
                }
                .timeline-description {
                    font-size: 0.875rem;
                    line-height: 1.375;
                    letter-spacing: 0.025em;
                    margin: 0;
                }
                "#}
            </style>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroesProps {
    pub heroes: content::Heroes,
}

#[function_component(Heroes)]
pub fn heroes(props: &HeroesProps) -> Html {
    let heroes = &props.heroes;

    html! {
        <AnimatedSection id="heroes" class="heroes">
            <div class="container">
                <h3 class="section-heading">{heroes.heading.clone()}</h3>
                <div class="gallery">
                    { heroes.gallery.iter().map(|item| html! {
                        <div key={item.name.clone()} class="gallery-item">
                            <img src={item.url.clone()} alt={format!("Imagem do {}", item.name)} loading="lazy" />
                            <div class="gallery-caption">
                                <h4>{item.name.clone()}</h4>
                            </div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .heroes {
                    background: #f9fafb;
                }
                .gallery {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .gallery-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                }
                .gallery-item img {
                    width: 100%;
                    height: 24rem;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .gallery-item:hover img {
                    transform: scale(1.1);
                }
                .gallery-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    background: rgba(0, 0, 0, 0.4);
                }
                .gallery-caption h4 {
                    color: #ffffff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    padding: 1rem;
                    margin: 0;
                }
                @media (max-width: 1024px) {
                    .gallery {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .gallery {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuotesProps {
    pub quotes: content::Quotes,
}

#[function_component(Quotes)]
pub fn quotes(props: &QuotesProps) -> Html {
    let current = use_message_cycle(props.quotes.items.clone(), config::QUOTE_INTERVAL);

    let body = match current {
        Ok((index, quote)) => html! {
            <div key={index} class="quote-body">
                <p class="quote-text">{format!("\"{}\"", quote.text)}</p>
                <p class="quote-author">{quote.author}</p>
            </div>
        },
        Err(err) => {
            error!("quotes section left empty: {}", err);
            html! {}
        }
    };

    html! {
        <AnimatedSection
            id="quotes"
            class="quotes"
            style={format!("background-image: url('{}');", props.quotes.background)}
        >
            <div class="quotes-overlay"></div>
            <div class="container quotes-content">
                <QuoteIcon />
                { body }
            </div>
            <style>
                {r#"
                .quotes {
                    position: relative;
                    background-size: cover;
                    background-position: center;
                    background-attachment: fixed;
                }
                .quotes-overlay {
                    position: absolute;
                    inset: 0;
                    background: #111827;
                    opacity: 0.8;
                }
                .quotes-content {
                    position: relative;
                    z-index: 10;
                    max-width: 48rem;
                    text-align: center;
                }
                .icon-quote {
                    width: 2.5rem;
                    height: 2.5rem;
                    color: #ef4444;
                    margin: 0 auto 1rem;
                    display: block;
                }
                .quote-body {
                    animation: quoteFade 0.8s ease-in-out;
                }
                @keyframes quoteFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .quote-text {
                    font-size: 1.875rem;
                    font-weight: 300;
                    font-style: italic;
                    color: #ffffff;
                    line-height: 1.625;
                }
                .quote-author {
                    margin-top: 1.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #e5e7eb;
                }
                "#}
            </style>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub footer: content::Footer,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let footer = &props.footer;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <p>{format!("© {} {}. {}", year, footer.owner, footer.rights)}</p>
                <p class="footer-disclaimer">{footer.disclaimer.clone()}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #ffffff;
                    padding: 2rem 0;
                    text-align: center;
                }
                .footer-disclaimer {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    margin-top: 0.5rem;
                }
                "#}
            </style>
        </footer>
    }
}
