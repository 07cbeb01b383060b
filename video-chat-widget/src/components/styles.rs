pub const WIDGET_STYLES: &str = r#"
/* Shell */
.video-chat-widget {
    position: fixed;
    z-index: 50;
    display: flex;
    flex-direction: column;
    background: var(--widget-bg, #ffffff);
    border: 1px solid var(--border-color, #e5e7eb);
    border-radius: 12px;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    overflow: hidden;
    font-family: system-ui, -apple-system, sans-serif;
}

.widget-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem;
    background: var(--accent-bg, #dc2626);
    color: white;
    cursor: move;
    user-select: none;
    flex-shrink: 0;
}

.widget-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
}

.widget-controls {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.widget-control {
    width: 24px;
    height: 24px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: transparent;
    color: white;
    border: none;
    border-radius: 4px;
    cursor: pointer;
}

.widget-control:hover {
    background: rgba(255, 255, 255, 0.2);
}

.widget-body {
    flex: 1;
    min-height: 0;
    display: flex;
    flex-direction: column;
}

/* Minimized badge */
.minimized-badge {
    position: fixed;
    z-index: 50;
    width: 48px;
    height: 48px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--accent-bg, #dc2626);
    color: white;
    border-radius: 999px;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
    cursor: pointer;
    font-size: 1.25rem;
    transition: transform 0.2s;
}

.minimized-badge:hover {
    transform: scale(1.05);
}

/* Input + processing */
.phase-panel {
    flex: 1;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 1.5rem;
}

.phase-panel.centered {
    align-items: center;
    text-align: center;
}

.phase-icon {
    width: 64px;
    height: 64px;
    margin: 0 auto 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #fef2f2;
    border-radius: 999px;
    font-size: 2rem;
}

.phase-heading {
    margin: 0 0 0.5rem;
    font-size: 1.125rem;
    font-weight: 600;
    color: #1f2937;
    text-align: center;
}

.phase-copy {
    margin: 0 0 1.5rem;
    font-size: 0.875rem;
    color: #4b5563;
    text-align: center;
}

.video-input,
.question-input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    font-size: 0.875rem;
    outline: none;
}

.video-input:focus,
.question-input:focus {
    border-color: transparent;
    box-shadow: 0 0 0 2px #ef4444;
}

.input-hint {
    margin-top: 0.25rem;
    font-size: 0.75rem;
    color: #6b7280;
}

.primary-button {
    width: 100%;
    margin-top: 1rem;
    padding: 0.75rem;
    background: var(--accent-bg, #dc2626);
    color: white;
    border: none;
    border-radius: 8px;
    font-weight: 500;
    cursor: pointer;
}

.primary-button:disabled,
.send-button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.spinner {
    width: 48px;
    height: 48px;
    margin-bottom: 1rem;
    border: 4px solid #fecaca;
    border-top-color: #dc2626;
    border-radius: 999px;
    animation: widget-spin 1s linear infinite;
}

@keyframes widget-spin {
    to { transform: rotate(360deg); }
}

/* Chat */
.messages-scroll-area {
    flex: 1;
    min-height: 0;
    overflow-y: auto;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.message-row {
    display: flex;
}

.user-row {
    justify-content: flex-end;
}

.assistant-row {
    justify-content: flex-start;
}

.message-bubble {
    max-width: 80%;
    padding: 0.5rem 1rem;
    border-radius: 16px;
    font-size: 0.875rem;
    line-height: 1.4;
}

.user-bubble {
    background: var(--accent-bg, #dc2626);
    color: white;
}

.assistant-bubble {
    background: #f3f4f6;
    color: #1f2937;
}

.message-time {
    display: block;
    margin-top: 0.25rem;
    font-size: 0.625rem;
    opacity: 0.7;
}

.typing-indicator,
.bounce-dots {
    display: flex;
    gap: 0.25rem;
}

.typing-indicator {
    padding: 0.75rem 1rem;
    background: #f3f4f6;
    border-radius: 16px;
}

.typing-indicator span,
.bounce-dots span {
    width: 6px;
    height: 6px;
    background: #6b7280;
    border-radius: 999px;
    animation: widget-bounce 1s infinite;
}

.bounce-dots span {
    width: 8px;
    height: 8px;
    background: #dc2626;
}

.typing-indicator span:nth-child(2),
.bounce-dots span:nth-child(2) {
    animation-delay: 0.2s;
}

.typing-indicator span:nth-child(3),
.bounce-dots span:nth-child(3) {
    animation-delay: 0.4s;
}

@keyframes widget-bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-4px); }
}

.chat-input-area {
    display: flex;
    gap: 0.5rem;
    padding: 1rem;
    border-top: 1px solid #e5e7eb;
}

.question-input {
    flex: 1;
    padding: 0.5rem 1rem;
}

.send-button {
    padding: 0.5rem 0.75rem;
    background: var(--accent-bg, #dc2626);
    color: white;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}
"#;
