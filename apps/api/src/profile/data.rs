//! The CV content served by the site. Edit here to update the portfolio.

use chrono::NaiveDate;

use crate::models::profile::{
    Certification, CvData, Education, PersonalProject, Profile, SkillLevel, Skills,
    TechnicalSkills, WorkExperience,
};

const GITHUB_URL: &str = "https://github.com/adamwickenden";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("CV dates are valid calendar dates")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8, years_of_experience: u8) -> SkillLevel {
    SkillLevel {
        name: name.to_string(),
        level,
        years_of_experience,
    }
}

pub fn cv_data() -> CvData {
    CvData {
        profile: Profile {
            name: "Adam Wickenden".to_string(),
            title: "Senior Data Scientist".to_string(),
            location: "London".to_string(),
            email: "adamwickenden94@gmail.com".to_string(),
            github: GITHUB_URL.to_string(),
            summary: "I have a wide range of experience delivering data science solutions across \
                      the public sector, defence and heavy industry. I've led multiple machine \
                      learning projects in Radio Frequency analysis, and driven the upskilling of \
                      colleagues in this space. I've also worked across all cloud platforms to \
                      develop and deploy functional machine learning solutions to clients."
                .to_string(),
        },
        work_experience: vec![
            WorkExperience {
                title: "Senior Data Scientist".to_string(),
                company: "Faculty.ai".to_string(),
                start_date: date(2021, 11, 1),
                end_date: None,
                duration: "3+ years".to_string(),
                location: "London, UK".to_string(),
                description: "Leading machine learning projects in Radio Frequency analysis and \
                              upskilling colleagues in signal processing."
                    .to_string(),
                achievements: strings(&[
                    "Technical Lead for a Drone Classification proof of concept, applying clustering and LightGBM to bespoke PDW data, achieving comparable performance to clients lengthy (6+ months) manual process in only 4 weeks",
                    "Oversaw continued development of internal IP and data collection for signal processing Centre of Excellence. Upskilled 5+ colleagues in signal processing",
                    "Upskilled in sensor design to build a sensor array for collecting audio of flying drones, collecting audio and RF data on 15 drone platforms",
                    "Applied XVector speech recognition models to RF data to classify drone controller and telemetry signals by specific emitter",
                    "Technical Lead for a Radar Waveform Zero/Few-Shot classification project, applying transformer based speech recognition models to radar data",
                    "Acted as lead data scientist when building relationships with third party software and data providers",
                    "Managed a small team of data scientists and machine learning engineers",
                    "Implemented a Random Forest Classifier for financial anomaly detection using manually labelled data",
                    "Developed functionality for collapsing bipartite graphs generated from location data using NetworkX and Numpy",
                    "Combined Zero-shot topic labelling with 1D KDE models to create a text based anomaly detection tool",
                    "Applied standardisation across 5 repos including MyPy, deployment controls, and AWS monitoring dashboards",
                ]),
            },
            WorkExperience {
                title: "Data Scientist / Software Engineer".to_string(),
                company: "Accenture".to_string(),
                start_date: date(2019, 3, 1),
                end_date: Some(date(2021, 11, 1)),
                duration: "2 years 8 months".to_string(),
                location: "London, UK".to_string(),
                description: "Delivered data science solutions across multiple industries \
                              including environmental research, mining, and financial services."
                    .to_string(),
                achievements: strings(&[
                    "Solo Data Scientist and Engineer on prototype led sales project for Stockholm Environment Institute",
                    "Developed backend modules for batch inference across arctic, integrating with satellite APIs and Google Earth Engine",
                    "Developed and tuned a bespoke UNET using Tensorflow for multi-band satellite imagery",
                    "Led Enterprise Scale Data Analytics project for Global Mining Company, developing Data Science modules to enhance mineral processing plants",
                    "Implemented Kernel Density Estimation modules for anomaly detection in real-time data",
                    "Developed CDF extraction modules for monitoring Rate Of Change of variables",
                    "Managed migration of 500 servers for Tier 1 Investment Bank",
                    "Managed a small team of developers using Agile methodology",
                    "Developed multiple CLI tools for server analysis using Python and SQL",
                    "Maintained and expanded internal website covering Full Stack development",
                ]),
            },
        ],
        education: vec![Education {
            degree: "MSci Physics".to_string(),
            institution: "University of Birmingham".to_string(),
            start_date: date(2014, 9, 1),
            end_date: Some(date(2018, 6, 1)),
            duration: "4 years".to_string(),
            location: "Birmingham, UK".to_string(),
            grade: "1st Class with Honours".to_string(),
            description: "Developed outstanding written, research and problem solving skills \
                          through consistently producing first class exam results and \
                          experimental reports."
                .to_string(),
            achievements: strings(&[
                "Significantly improved independent research abilities by fulfilling briefs and undertaking self-study modules",
                "Consistently shown an aptitude for understanding complex physical, mathematical and technical concepts",
                "Developed the ability to efficiently articulate high level concepts through presenting multiple seminars to peers and staff",
            ]),
        }],
        certifications: vec![Certification {
            title: "Machine Learning Course".to_string(),
            issuer: "Coursera - Stanford University (Andrew Ng)".to_string(),
            issue_date: date(2021, 2, 1),
            expiration_date: None,
            credential_id: "ML-STANFORD-2021".to_string(),
            description: "Completed to extend knowledge of machine learning concepts from a \
                          fundamental mathematical basis."
                .to_string(),
        }],
        skills: Skills {
            technical: TechnicalSkills {
                programming_languages: vec![
                    skill("Python", 95, 5),
                    skill("C#", 80, 3),
                    skill("SQL", 85, 4),
                    skill("JavaScript", 75, 3),
                    skill("Terraform", 70, 2),
                ],
                frameworks: vec![
                    skill("TensorFlow", 90, 3),
                    skill("PyTorch", 85, 2),
                    skill("Scikit-Learn", 95, 4),
                    skill("Pandas", 95, 5),
                    skill("NumPy", 95, 5),
                    skill("Unity", 85, 5),
                ],
                tools: vec![
                    skill("AWS", 85, 3),
                    skill("Microsoft Azure", 80, 2),
                    skill("Google Cloud Platform", 75, 2),
                    skill("Git", 90, 5),
                    skill("NetworkX", 80, 2),
                ],
            },
            soft: strings(&[
                "Technical Leadership",
                "Team Management",
                "Project Management",
                "Problem Solving",
                "Research & Development",
                "Client Relations",
                "Mentoring & Upskilling",
            ]),
        },
        projects: vec![
            PersonalProject {
                name: "Bias Assessment Tool".to_string(),
                description: "JavaScript & GCP: Using Google Firebase to create a demo website \
                              that collects news articles from RSS feeds and uses GPT 3.5/4 to \
                              assess language bias"
                    .to_string(),
                technologies: strings(&[
                    "JavaScript",
                    "Google Cloud Platform",
                    "Firebase",
                    "GPT-3.5/4",
                    "RSS",
                ]),
                start_date: date(2023, 1, 1),
                status: "Current".to_string(),
                github: GITHUB_URL.to_string(),
            },
            PersonalProject {
                name: "GPU-Accelerated Natural Phenomena Simulation".to_string(),
                description: "Unity: Using compute shaders (GPU accelerated programming) to \
                              perform large scale simulations of natural phenomena, and developed \
                              a self driving car simulation using evolutionary algorithms"
                    .to_string(),
                technologies: strings(&[
                    "Unity",
                    "C#",
                    "Compute Shaders",
                    "GPU Programming",
                    "Evolutionary Algorithms",
                ]),
                start_date: date(2021, 1, 1),
                status: "Current".to_string(),
                github: GITHUB_URL.to_string(),
            },
            PersonalProject {
                name: "Game Development Portfolio".to_string(),
                description: "Unity Development: Developed multiple games including 2D infinite \
                              scrolling universe explorer, random maze generator, 3D online \
                              shooter demo, and competitive pong/air hockey game"
                    .to_string(),
                technologies: strings(&["Unity", "C#", "UnityPUN", "Game Development"]),
                start_date: date(2018, 1, 1),
                status: "Current".to_string(),
                github: GITHUB_URL.to_string(),
            },
        ],
    }
}
