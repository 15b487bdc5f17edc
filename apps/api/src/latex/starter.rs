/// Editable starting point served by `GET /latex/starter`.
pub const STARTER_TEMPLATE: &str = r"\documentclass[11pt,a4paper]{article}

% Packages
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
\usepackage[margin=0.75in]{geometry}
\usepackage{enumitem}
\usepackage{hyperref}
\usepackage{xcolor}
\usepackage{titlesec}

% Colors
\definecolor{primary}{RGB}{0, 79, 144}

% Section formatting
\titleformat{\section}{\large\bfseries\color{primary}}{}{0em}{}[\titlerule]
\titlespacing{\section}{0pt}{10pt}{5pt}

\setlength{\parindent}{0pt}
\pagestyle{empty}

\begin{document}

% =============================================
% HEADER - Your Name and Contact Information
% =============================================
\begin{center}
    {\LARGE\bfseries Your Name}\\[5pt]
    \href{mailto:your.email@example.com}{your.email@example.com} $|$
    (123) 456-7890 $|$
    City, State $|$
    \href{https://linkedin.com/in/yourprofile}{LinkedIn} $|$
    \href{https://github.com/yourusername}{GitHub}
\end{center}

% =============================================
% PROFESSIONAL SUMMARY
% =============================================
\section*{Professional Summary}
Experienced professional with expertise in [your field]. Strong background in [key skills].
Passionate about [your interests/goals].

% =============================================
% EXPERIENCE
% =============================================
\section*{Experience}

\textbf{Job Title} \hfill Month Year -- Present\\
\textit{Company Name} \hfill City, State
\begin{itemize}[leftmargin=*,noitemsep]
    \item Accomplished X by implementing Y, resulting in Z
    \item Led team of N people to deliver project ahead of schedule
    \item Improved process efficiency by X\% through automation
\end{itemize}

\textbf{Previous Job Title} \hfill Month Year -- Month Year\\
\textit{Previous Company} \hfill City, State
\begin{itemize}[leftmargin=*,noitemsep]
    \item Developed and maintained key features
    \item Collaborated with cross-functional teams
\end{itemize}

% =============================================
% EDUCATION
% =============================================
\section*{Education}

\textbf{Degree Name} \hfill Year\\
\textit{University Name} \hfill City, State\\
Relevant coursework: Course 1, Course 2, Course 3

% =============================================
% SKILLS
% =============================================
\section*{Skills}

\textbf{Programming:} Python, JavaScript, TypeScript, Java\\
\textbf{Frameworks:} React, Node.js, Flask, Django\\
\textbf{Tools:} Git, Docker, AWS, Linux

% =============================================
% PROJECTS
% =============================================
\section*{Projects}

\textbf{Project Name} \textit{(Python, React)}\\
Description of the project and its impact.

\textbf{Another Project} \textit{(TypeScript, Node.js)}\\
Description of this project.

\end{document}
";
