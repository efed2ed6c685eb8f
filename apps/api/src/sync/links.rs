// Static deep links into the LinkedIn profile editor. Outbound navigation
// targets only; never parsed or validated here.

pub const PROFILE: &str = "https://www.linkedin.com/in/me/";
pub const INTRO: &str = "https://www.linkedin.com/in/me/edit/topcard/";
pub const ABOUT: &str = "https://www.linkedin.com/in/me/edit/about/";
pub const EXPERIENCE: &str = "https://www.linkedin.com/in/me/details/experience/";
pub const EDUCATION: &str = "https://www.linkedin.com/in/me/details/education/";
pub const SKILLS: &str = "https://www.linkedin.com/in/me/details/skills/";
pub const PROJECTS: &str = "https://www.linkedin.com/in/me/details/projects/";
pub const PUBLICATIONS: &str = "https://www.linkedin.com/in/me/details/publications/";
