//! Canned advisor replies and the keyword decision table that picks one.
//!
//! Matching is plain substring search on the lower-cased message. Rules are
//! evaluated top to bottom and the first match wins; when nothing matches the
//! capabilities block is returned.

use std::borrow::Cow;

pub const CAREER: &str = "Great question about career paths! In computer science, you have numerous exciting options:

🎯 **Software Development**: Frontend, Backend, Full-stack, Mobile
📊 **Data Science**: Data Analyst, Data Scientist, ML Engineer
🔒 **Cybersecurity**: Security Analyst, Ethical Hacker, Security Architect
☁️ **Cloud Computing**: Cloud Engineer, DevOps, Site Reliability Engineer
🤖 **AI/ML**: Machine Learning Engineer, AI Researcher, NLP Specialist
🎮 **Game Development**: Game Programmer, Graphics Engineer
💼 **Product Management**: Technical Product Manager, Engineering Manager

Each path has different requirements and growth opportunities. Would you like me to dive deeper into any specific area?";

pub const SALARY: &str = "Salary ranges vary by location, experience, and specialization:

💰 **Entry Level (0-2 years)**:
- Software Engineer: $70K - $120K
- Data Analyst: $60K - $90K
- Cybersecurity Analyst: $65K - $95K

💰 **Mid Level (3-5 years)**:
- Senior Software Engineer: $100K - $160K
- Data Scientist: $110K - $150K
- DevOps Engineer: $105K - $145K

💰 **Senior Level (5+ years)**:
- Staff Engineer: $150K - $250K+
- Principal Data Scientist: $160K - $220K+
- Security Architect: $140K - $200K+

Remember, these are base salaries and don't include bonuses, stock options, or benefits. Location significantly impacts these numbers!";

pub const SKILLS: &str = "Here are the essential skills for different CS roles:

🔧 **Technical Skills**:
- Programming languages (Python, JavaScript, Java, C++)
- Data structures and algorithms
- System design and architecture
- Database management (SQL, NoSQL)
- Version control (Git)
- Cloud platforms (AWS, Azure, GCP)

🧠 **Soft Skills**:
- Problem-solving and analytical thinking
- Communication and teamwork
- Project management
- Continuous learning mindset
- Attention to detail

📚 **Specialized Skills** (based on your chosen path):
- **Web Dev**: React, Node.js, HTML/CSS
- **Data Science**: Statistics, R, Pandas, Tableau
- **ML**: TensorFlow, PyTorch, scikit-learn
- **Mobile**: Swift, Kotlin, React Native

What specific role are you interested in? I can provide more targeted skill recommendations!";

pub const INTERVIEW: &str = "Here's your complete interview preparation guide:

📝 **Technical Preparation**:
- Practice coding problems on LeetCode, HackerRank
- Review data structures: arrays, linked lists, trees, graphs
- Study algorithms: sorting, searching, dynamic programming
- Practice system design for senior roles
- Review your projects and be ready to explain them

🗣️ **Behavioral Questions**:
- Prepare STAR method examples (Situation, Task, Action, Result)
- Common questions: \"Tell me about a challenge you overcame\"
- \"Describe a time you worked in a team\"
- \"How do you handle tight deadlines?\"

💡 **Day of Interview**:
- Research the company and role thoroughly
- Prepare thoughtful questions to ask them
- Practice explaining your thought process out loud
- Bring copies of your resume
- Dress appropriately for the company culture

🎯 **Follow-up**:
- Send thank-you emails within 24 hours
- Reiterate your interest and key qualifications
- Be patient but follow up if you don't hear back

Would you like me to help you prepare for any specific type of interview?";

pub const TRANSITION: &str = "Career transitions in tech are definitely possible! Here's how to approach it:

🔄 **Assess Your Current Skills**:
- Identify transferable skills from your current role
- Determine what new skills you need to learn
- Create a learning timeline and stick to it

📚 **Learning Strategy**:
- Take online courses (Coursera, Udemy, edX)
- Build projects to demonstrate new skills
- Contribute to open source projects
- Join relevant communities and forums

🛠️ **Build Your Portfolio**:
- Create 3-5 projects showcasing your new skills
- Document your learning journey on GitHub
- Write blog posts about what you're learning
- Get involved in hackathons or coding challenges

🤝 **Networking**:
- Attend tech meetups and conferences
- Connect with professionals in your target field
- Find a mentor who's made a similar transition
- Join online communities (Reddit, Discord, Slack groups)

📈 **Gradual Transition**:
- Look for roles that bridge your current and target fields
- Consider freelance projects to gain experience
- Apply for junior roles even if you have senior experience elsewhere

What specific transition are you considering? I can provide more targeted advice!";

pub const CAPABILITIES: &str = "I understand you're looking for career guidance! I'm here to help with:

🎯 **Career Planning**: Exploring different CS paths and specializations
💰 **Salary Information**: Understanding compensation across different roles
📚 **Skill Development**: Learning roadmaps and resource recommendations
💼 **Interview Prep**: Technical and behavioral interview strategies
🔄 **Career Transitions**: Moving between different tech roles
📈 **Growth Strategies**: Advancing in your current career path

Feel free to ask me anything specific about your CS career journey. You can also pick one of the popular questions below to get started!

What aspect of your career would you like to explore today?";

const TRANSITION_QUESTION: &str = "What specific transition are you considering?";
const ROLE_QUESTION: &str = "What specific role are you interested in?";

const ML_ADVICE: &str = "Machine Learning is a fantastic field! You'll need strong math skills (statistics, linear algebra), Python programming, and experience with ML libraries like scikit-learn and TensorFlow. Start with online courses and build projects to showcase your skills!";
const DATA_SCIENCE_ADVICE: &str = "For Data Science specifically, focus on: Python/R, SQL, statistics, data visualization (Tableau, matplotlib), and machine learning. Build a portfolio with real datasets and document your analysis process!";
const WEB_DEV_ADVICE: &str = "For Web Development, master: HTML/CSS, JavaScript, a frontend framework (React/Vue), backend technologies (Node.js, Python), databases, and version control. Build full-stack projects to showcase your abilities!";

/// Which rule of the decision table produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Career,
    Salary,
    Skills,
    Interview,
    Transition,
    MachineLearning,
    DataScience,
    WebDevelopment,
    Capabilities,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Career => "career",
            Topic::Salary => "salary",
            Topic::Skills => "skills",
            Topic::Interview => "interview",
            Topic::Transition => "transition",
            Topic::MachineLearning => "machine-learning",
            Topic::DataScience => "data-science",
            Topic::WebDevelopment => "web-development",
            Topic::Capabilities => "capabilities",
        }
    }
}

/// How a rule builds its reply
enum Reply {
    Canned(&'static str),
    /// A canned block with its closing question swapped for targeted advice
    Substituted {
        base: &'static str,
        question: &'static str,
        advice: &'static str,
    },
}

impl Reply {
    fn render(&self) -> Cow<'static, str> {
        match self {
            Reply::Canned(text) => Cow::Borrowed(text),
            Reply::Substituted { base, question, advice } => {
                Cow::Owned(base.replacen(question, advice, 1))
            }
        }
    }
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
    reply: Reply,
}

// Order matters: the topic keywords are checked before the secondary groups.
const RULES: &[Rule] = &[
    Rule { topic: Topic::Career, keywords: &["career"], reply: Reply::Canned(CAREER) },
    Rule { topic: Topic::Salary, keywords: &["salary"], reply: Reply::Canned(SALARY) },
    Rule { topic: Topic::Skills, keywords: &["skills"], reply: Reply::Canned(SKILLS) },
    Rule { topic: Topic::Interview, keywords: &["interview"], reply: Reply::Canned(INTERVIEW) },
    Rule { topic: Topic::Transition, keywords: &["transition"], reply: Reply::Canned(TRANSITION) },
    Rule {
        topic: Topic::MachineLearning,
        keywords: &["machine learning", "ml"],
        reply: Reply::Substituted { base: TRANSITION, question: TRANSITION_QUESTION, advice: ML_ADVICE },
    },
    Rule {
        topic: Topic::DataScience,
        keywords: &["data scien"],
        reply: Reply::Substituted { base: SKILLS, question: ROLE_QUESTION, advice: DATA_SCIENCE_ADVICE },
    },
    Rule {
        topic: Topic::WebDevelopment,
        keywords: &["web dev"],
        reply: Reply::Substituted { base: SKILLS, question: ROLE_QUESTION, advice: WEB_DEV_ADVICE },
    },
];

static FALLBACK: Rule = Rule {
    topic: Topic::Capabilities,
    keywords: &[],
    reply: Reply::Canned(CAPABILITIES),
};

fn matching_rule(message: &str) -> &'static Rule {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| message.contains(k)))
        .unwrap_or(&FALLBACK)
}

/// Which topic a message falls under
pub fn topic(message: &str) -> Topic {
    matching_rule(message).topic
}

/// Pick the canned reply for a user message
pub fn classify(message: &str) -> Cow<'static, str> {
    matching_rule(message).reply.render()
}
