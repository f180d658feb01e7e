use serde::Serialize;

use crate::links::{mailto_url, whatsapp_url};

pub const NAME: &str = "Tayara Romero";
pub const FULL_NAME: &str = "Tayara Zampim Romero";
pub const NICKNAME: &str = "{TayFly}";
pub const SITE_TITLE: &str = "Tayara Romero {TayFly} - Desenvolvedora Fullstack";
pub const SITE_DESCRIPTION: &str = "Portfolio de Tayara Zampim Romero (TayFly) - Desenvolvedora Fullstack JavaScript especializada em React, Node.js e TypeScript";
pub const JOB_TITLE: &str = "Desenvolvedora Fullstack JavaScript";
/// Year shown in the footer copyright, fixed at build time.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub const EMAIL: &str = "tzampim@gmail.com";
pub const EMAIL_SUBJECT: &str = "Contato através do Portfólio";
pub const EMAIL_BODY: &str = "Olá Tayara,\r\n\r\nGostaria de conversar sobre um projeto.";
pub const WHATSAPP_PHONE: &str = "5519996107311";
pub const WHATSAPP_DISPLAY: &str = "(19) 99610-7311";
pub const WHATSAPP_MESSAGE: &str =
    "Olá Tayara! Vim através do seu portfólio e gostaria de conversar sobre um projeto.";

pub fn whatsapp_link() -> String {
    whatsapp_url(WHATSAPP_PHONE, WHATSAPP_MESSAGE)
}

/// Chat link without a pre-filled message, used in the footer.
pub fn whatsapp_plain_link() -> String {
    format!("https://wa.me/{WHATSAPP_PHONE}")
}

pub fn email_link() -> String {
    mailto_url(EMAIL, EMAIL_SUBJECT, EMAIL_BODY)
}

/// A run of biography text, optionally emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Plain(&'static str),
    Strong(&'static str),
}

pub const BIO: &[&[Span]] = &[
    &[
        Span::Plain("Meu nome é "),
        Span::Strong("Tayara Zampim Romero"),
        Span::Plain(", mas no mundo da tecnologia sou conhecida como "),
        Span::Strong("Tayfly"),
        Span::Plain(" — um apelido que carrego com orgulho, lembrando minha primeira formação em "),
        Span::Strong("Aviação Civil"),
        Span::Plain(". Embora não tenha seguido carreira nos ares, essa fase despertou em mim o gosto por desafios, precisão e trabalho em equipe — valores que encontrei novamente na programação."),
    ],
    &[
        Span::Plain("Sou formada em "),
        Span::Strong("Recursos Humanos"),
        Span::Plain(" pela Faculdade Claretiano, e essa base me trouxe empatia, organização e uma comunicação clara — habilidades que aplico todos os dias como desenvolvedora "),
        Span::Strong("Fullstack JavaScript"),
        Span::Plain("."),
    ],
    &[
        Span::Plain("Tenho conhecimento nas tecnologias do ecossistema JavaScript, como "),
        Span::Strong("HTML, CSS, JavaScript, TypeScript, React e Node.js"),
        Span::Plain(", além de ter conhecimentos em "),
        Span::Strong("Python e Java"),
        Span::Plain(". Tenho experiência com projetos reais, criados para clientes e empresas, sempre buscando unir performance e experiência do usuário."),
    ],
    &[
        Span::Plain("Entre 2013 e 2022, trabalhei na "),
        Span::Strong("Ouro Verdde"),
        Span::Plain(" como Auxiliar de Escritório, onde desenvolvi disciplina e atenção aos detalhes."),
    ],
    &[
        Span::Plain("De 2022 a 2025, atuei como "),
        Span::Strong("Gerente de Projetos"),
        Span::Plain(" na "),
        Span::Strong("Onebitcode"),
        Span::Plain(", uma escola de programação que me aproximou definitivamente da área tech — liderando pessoas, coordenando entregas e aprendendo diariamente com o universo do código."),
    ],
    &[
        Span::Plain("Hoje, sou "),
        Span::Strong("desenvolvedora Fullstack Júnior"),
        Span::Plain(", criadora de uma empresa de marketing digital e apaixonada por unir tecnologia e criatividade para gerar impacto real."),
    ],
];

pub const BIO_CLOSING: &str = "Meu objetivo é crescer profissionalmente em ambientes que valorizem a inovação, o aprendizado contínuo e a colaboração.";

pub const SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "Git",
    "Marketing Digital",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "hubneosoma",
        title: "HubNeoSoma",
        description: "Minha empresa de marketing digital e tecnologia. Transformamos negócios através de estratégias humanizadas, automação inteligente e branding consciente.",
        image: "/images/hubneosoma.jpeg",
        image_alt: "Website HubNeoSoma",
        url: "https://www.hubneosoma.com.br",
    },
    Project {
        slug: "cristiane-melo",
        title: "Cristiane Melo",
        description: "Psicoterapia e acolhimento emocional para mulheres. Se você se sente perdida, desconectada ou presa em ciclos emocionais dolorosos, aqui você encontra apoio para se reencontrar, curar feridas e reconstruir sua essência.",
        image: "/images/crismelo.png",
        image_alt: "Website Cristiane Melo",
        url: "https://www.cristianemelo.com.br",
    },
    Project {
        slug: "jadore",
        title: "J'adore Cosméticos",
        description: "E-commerce completo para loja de cosméticos com mais de 5.000 produtos. Sistema de catálogo, carrinho de compras e integração com meios de pagamento.",
        image: "/images/jadore.jpeg",
        image_alt: "Website J'adore Cosméticos",
        url: "https://www.jadorecosmeticos.com.br",
    },
    Project {
        slug: "focus-tools",
        title: "Focus Tools",
        description: "Website institucional para empresa de ferramentas industriais. Catálogo de produtos, sistema de orçamentos e área administrativa.",
        image: "/images/focustools.jpeg",
        image_alt: "Website Focus Tools",
        url: "https://www.focustools.com.br",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub kind: SocialKind,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social {
        kind: SocialKind::GitHub,
        title: "GitHub",
        description: "Confira meus repositórios e projetos open source. Acompanhe meu desenvolvimento e contribuições para a comunidade.",
        url: "https://github.com/FlowDev1994",
    },
    Social {
        kind: SocialKind::LinkedIn,
        title: "LinkedIn",
        description: "Conecte-se comigo profissionalmente. Veja minha trajetória, experiências e conquistas na área de tecnologia.",
        url: "https://www.linkedin.com/in/tayara-romero/",
    },
];

/// The project card under the pointer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoveredProject(Option<&'static str>);

impl HoveredProject {
    pub fn enter(&mut self, slug: &'static str) {
        self.0 = Some(slug);
    }

    /// Leaving any card clears the hover, whichever card was entered last.
    pub fn leave(&mut self) {
        self.0 = None;
    }

    pub fn get(&self) -> Option<&'static str> {
        self.0
    }

    pub fn is(&self, slug: &str) -> bool {
        self.0 == Some(slug)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    alternate_name: &'static str,
    job_title: &'static str,
    email: String,
    knows_about: &'static [&'static str],
    same_as: Vec<&'static str>,
}

/// schema.org `Person` block for the document head.
pub fn person_json_ld() -> String {
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: FULL_NAME,
        alternate_name: "TayFly",
        job_title: JOB_TITLE,
        email: format!("mailto:{EMAIL}"),
        knows_about: SKILLS,
        same_as: SOCIALS.iter().map(|s| s.url).collect(),
    };
    match serde_json::to_string(&person) {
        Ok(json) => json,
        Err(err) => {
            log::error!("couldn't serialize structured data: {err}");
            String::new()
        }
    }
}
